/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use std::fmt;

/// Main error type for the booking client
///
/// Non-2xx HTTP statuses are not errors: they are delivered inside a
/// [`ResponseEnvelope`](crate::model::envelope::ResponseEnvelope).
#[derive(Debug)]
pub enum AppError {
    /// Missing or invalid configuration (for example no base URL)
    Configuration(String),
    /// A credential required by the selected auth method is absent
    MissingCredential(String),
    /// The auth method tag is not one of the supported methods
    UnsupportedAuthMethod(String),
    /// The auth endpoint answered, but not with a usable token
    AuthenticationFailed(String),
    /// A successful response body did not match the requested shape
    MalformedResponse(String),
    /// Invalid caller input, such as a header that is not valid HTTP
    InvalidInput(String),
    /// Transport fault (timeout, DNS, connection refused)
    Network(reqwest::Error),
    /// JSON (de)serialization error
    Json(serde_json::Error),
    /// I/O error from the token file
    Io(std::io::Error),
}

/// Result alias used throughout the crate
pub type AppResult<T> = Result<T, AppError>;

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Configuration(msg) => write!(f, "configuration error: {msg}"),
            AppError::MissingCredential(msg) => write!(f, "missing credential: {msg}"),
            AppError::UnsupportedAuthMethod(method) => {
                write!(f, "unsupported auth method: {method}")
            }
            AppError::AuthenticationFailed(msg) => write!(f, "authentication failed: {msg}"),
            AppError::MalformedResponse(msg) => write!(f, "malformed response: {msg}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}
