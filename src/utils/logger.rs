use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

/// Installs the global `tracing` subscriber
///
/// The level comes from the `LOGLEVEL` environment variable (`TRACE`, `DEBUG`,
/// `INFO`, `WARN`, `ERROR`) and defaults to `INFO`. Safe to call many times;
/// only the first call has an effect.
pub fn setup_logger() {
    INIT.call_once(|| {
        let level = parse_level(env::var("LOGLEVEL").ok().as_deref());

        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_target(false)
            .with_line_number(true)
            .finish();

        // a subscriber installed by the host (e.g. another test helper) wins
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}

fn parse_level(value: Option<&str>) -> Level {
    match value.map(|v| v.trim().to_uppercase()).as_deref() {
        Some("TRACE") => Level::TRACE,
        Some("DEBUG") => Level::DEBUG,
        Some("WARN") => Level::WARN,
        Some("ERROR") => Level::ERROR,
        _ => Level::INFO,
    }
}
