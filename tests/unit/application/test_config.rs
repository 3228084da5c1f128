use booking_client::application::config::Config;
use booking_client::error::AppError;
use booking_client::storage::config::{TokenStoreConfig, TokenStoreKind};

#[test]
fn with_base_url_builds_memory_backed_config() {
    let config = Config::with_base_url("https://restful-booker.herokuapp.com/").unwrap();
    assert_eq!(config.base_url, "https://restful-booker.herokuapp.com");
    assert_eq!(config.rest_api.timeout_secs, 30);
    assert_eq!(config.token_store.kind, TokenStoreKind::Memory);
    assert_eq!(config.token_store.ttl_secs, None);
}

#[test]
fn missing_base_url_is_a_configuration_error() {
    let err = Config::with_base_url("").unwrap_err();
    assert!(matches!(err, AppError::Configuration(_)));
}

#[test]
fn builders_set_credentials_and_store() {
    let config = Config::with_base_url("http://localhost:3001")
        .unwrap()
        .with_credentials("admin", "password123")
        .with_token_store(TokenStoreConfig::file("/tmp/tokens.json").with_ttl_secs(600));

    let credentials = config.credentials.as_ref().unwrap();
    assert_eq!(credentials.username, "admin");
    assert_eq!(credentials.password, "password123");
    assert_eq!(config.token_store.kind, TokenStoreKind::File);
    assert_eq!(config.token_store.ttl_secs, Some(600));
}

#[test]
fn config_serializes_for_display() {
    let config = Config::with_base_url("http://localhost:3001").unwrap();
    let json = serde_json::to_value(&config).unwrap();
    assert_eq!(json["base_url"], "http://localhost:3001");
    assert_eq!(json["token_store"]["kind"], "memory");
    assert!(config.to_string().contains("localhost:3001"));
}
