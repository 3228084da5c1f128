use booking_client::error::AppError;
use std::error::Error;

#[test]
fn test_app_error_display_configuration() {
    let error = AppError::Configuration("BASE_URL is not set".to_string());
    assert_eq!(error.to_string(), "configuration error: BASE_URL is not set");
}

#[test]
fn test_app_error_display_missing_credential() {
    let error = AppError::MissingCredential("token".to_string());
    assert_eq!(error.to_string(), "missing credential: token");
}

#[test]
fn test_app_error_display_unsupported_auth_method() {
    let error = AppError::UnsupportedAuthMethod("OAUTH".to_string());
    assert_eq!(error.to_string(), "unsupported auth method: OAUTH");
}

#[test]
fn test_app_error_display_authentication_failed() {
    let error = AppError::AuthenticationFailed("Bad credentials".to_string());
    assert_eq!(error.to_string(), "authentication failed: Bad credentials");
}

#[test]
fn test_app_error_display_malformed_response() {
    let error = AppError::MalformedResponse("missing field".to_string());
    assert_eq!(error.to_string(), "malformed response: missing field");
}

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("bad header".to_string());
    assert_eq!(error.to_string(), "invalid input: bad header");
}

#[test]
fn test_app_error_from_serde() {
    let json = r#"{"invalid": json}"#;
    let serde_error = serde_json::from_str::<serde_json::Value>(json).unwrap_err();
    let app_error: AppError = serde_error.into();

    match app_error {
        AppError::Json(ref e) => assert!(app_error.source().is_some() && e.is_syntax()),
        _ => panic!("Expected Json error"),
    }
}

#[test]
fn test_app_error_from_io() {
    let io_error = std::io::Error::other("test");
    let app_error: AppError = io_error.into();

    match app_error {
        AppError::Io(_) => assert!(app_error.to_string().starts_with("io error")),
        _ => panic!("Expected Io error"),
    }
}

#[test]
fn test_plain_errors_have_no_source() {
    assert!(AppError::Configuration("x".into()).source().is_none());
}
