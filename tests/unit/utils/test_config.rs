use booking_client::error::AppError;
use booking_client::utils::config::{get_env_or_default, get_env_or_none, get_env_required};
use std::env;

// Each test uses its own variable names so they can run in parallel.

#[test]
fn test_get_env_or_default() {
    unsafe {
        env::set_var("BOOKING_TEST_TIMEOUT", "45");
        env::set_var("BOOKING_TEST_TIMEOUT_BAD", "forty");
    }
    assert_eq!(get_env_or_default("BOOKING_TEST_TIMEOUT", 30u64), 45);
    assert_eq!(get_env_or_default("BOOKING_TEST_TIMEOUT_BAD", 30u64), 30);
    assert_eq!(get_env_or_default("BOOKING_TEST_TIMEOUT_UNSET", 30u64), 30);
}

#[test]
fn test_get_env_or_none() {
    unsafe {
        env::set_var("BOOKING_TEST_USERNAME", "  admin  ");
        env::set_var("BOOKING_TEST_BLANK", "   ");
    }
    assert_eq!(
        get_env_or_none::<String>("BOOKING_TEST_USERNAME").as_deref(),
        Some("admin")
    );
    assert_eq!(get_env_or_none::<String>("BOOKING_TEST_BLANK"), None);
    assert_eq!(get_env_or_none::<String>("BOOKING_TEST_USERNAME_UNSET"), None);
}

#[test]
fn test_get_env_required() {
    unsafe {
        env::set_var("BOOKING_TEST_BASE_URL", "http://localhost:3001");
    }
    assert_eq!(
        get_env_required("BOOKING_TEST_BASE_URL").unwrap(),
        "http://localhost:3001"
    );

    let err = get_env_required("BOOKING_TEST_BASE_URL_UNSET").unwrap_err();
    assert!(matches!(err, AppError::Configuration(ref msg) if msg.contains("BOOKING_TEST_BASE_URL_UNSET")));
}
