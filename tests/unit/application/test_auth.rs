use booking_client::application::auth::{AuthCredentials, AuthMethod, Authenticator};
use booking_client::error::AppError;

#[test]
fn bearer_produces_single_authorization_header() {
    let config =
        Authenticator::authenticate(AuthMethod::Bearer, &AuthCredentials::bearer("abc")).unwrap();
    assert_eq!(config.headers.len(), 1);
    assert_eq!(config.header("Authorization"), Some("Bearer abc"));
    assert!(config.cookies.is_empty());
    assert!(config.query.is_empty());
}

#[test]
fn base64_uses_pre_encoded_value_verbatim() {
    let config = Authenticator::authenticate(
        AuthMethod::Base64,
        &AuthCredentials::encoded("YWRtaW46cGFzc3dvcmQxMjM="),
    )
    .unwrap();
    assert_eq!(config.headers.len(), 1);
    assert_eq!(
        config.header("Authorization"),
        Some("Basic YWRtaW46cGFzc3dvcmQxMjM=")
    );
}

#[test]
fn cookie_produces_cookie_header() {
    let config =
        Authenticator::authenticate(AuthMethod::Cookie, &AuthCredentials::cookie("token=xyz"))
            .unwrap();
    assert_eq!(config.headers.len(), 1);
    assert_eq!(config.header("Cookie"), Some("token=xyz"));
}

#[test]
fn username_password_encodes_basic() {
    let config = Authenticator::authenticate(
        AuthMethod::UsernamePassword,
        &AuthCredentials::username_password("admin", "password123"),
    )
    .unwrap();
    assert_eq!(config.headers.len(), 1);
    assert_eq!(
        config.header("Authorization"),
        Some("Basic YWRtaW46cGFzc3dvcmQxMjM=")
    );
}

#[test]
fn each_method_requires_its_own_input() {
    let cases = [
        (AuthMethod::Bearer, AuthCredentials::cookie("c")),
        (AuthMethod::Base64, AuthCredentials::bearer("t")),
        (AuthMethod::Cookie, AuthCredentials::encoded("e")),
        (
            AuthMethod::UsernamePassword,
            AuthCredentials {
                username: Some("john".into()),
                ..Default::default()
            },
        ),
        (
            AuthMethod::UsernamePassword,
            AuthCredentials {
                password: Some("secret".into()),
                ..Default::default()
            },
        ),
    ];
    for (method, credentials) in cases {
        let err = Authenticator::authenticate(method, &credentials).unwrap_err();
        assert!(
            matches!(err, AppError::MissingCredential(_)),
            "{method} should fail with MissingCredential, got {err:?}"
        );
    }
}

#[test]
fn unknown_tag_is_rejected() {
    let err =
        Authenticator::authenticate_tag("KERBEROS", &AuthCredentials::bearer("t")).unwrap_err();
    assert!(matches!(err, AppError::UnsupportedAuthMethod(_)));
}

#[test]
fn known_tag_dispatches() {
    let config = Authenticator::authenticate_tag("cookie", &AuthCredentials::cookie("a=b")).unwrap();
    assert_eq!(config.header("Cookie"), Some("a=b"));
}

#[test]
fn auth_method_serde_tags() {
    let json = serde_json::to_string(&AuthMethod::UsernamePassword).unwrap();
    assert_eq!(json, "\"USERNAME_PASSWORD\"");
    let method: AuthMethod = serde_json::from_str("\"BEARER\"").unwrap();
    assert_eq!(method, AuthMethod::Bearer);
}
