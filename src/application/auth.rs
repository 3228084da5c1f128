/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Authentication header construction
//!
//! This module maps an [`AuthMethod`] and a bag of [`AuthCredentials`] to the
//! [`RequestConfig`] that must accompany authenticated requests:
//! - Bearer: `Authorization: Bearer <token>`
//! - Base64: `Authorization: Basic <pre-encoded>`
//! - Cookie: `Cookie: <cookie>`
//! - Username/password: `Authorization: Basic base64(username:password)`
//!
//! The mapping is pure; the username/password token exchange against the
//! auth endpoint lives in [`ServiceClient::authenticate`](crate::application::client::ServiceClient::authenticate).

use crate::error::AppError;
use crate::model::request_config::RequestConfig;
use base64::{Engine as _, engine::general_purpose};
use reqwest::header::{AUTHORIZATION, COOKIE};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Strategy used to produce authorization headers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthMethod {
    /// Bearer token
    Bearer,
    /// Pre-encoded basic credentials
    Base64,
    /// Raw cookie header
    Cookie,
    /// Username and password, exchanged for a session token
    UsernamePassword,
}

impl fmt::Display for AuthMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            AuthMethod::Bearer => "BEARER",
            AuthMethod::Base64 => "BASE64",
            AuthMethod::Cookie => "COOKIE",
            AuthMethod::UsernamePassword => "USERNAME_PASSWORD",
        };
        f.write_str(tag)
    }
}

impl FromStr for AuthMethod {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_uppercase().replace(['-', ' '], "_");
        match tag.as_str() {
            "BEARER" => Ok(AuthMethod::Bearer),
            "BASE64" | "BASIC" => Ok(AuthMethod::Base64),
            "COOKIE" => Ok(AuthMethod::Cookie),
            "USERNAME_PASSWORD" | "USERNAMEPASSWORD" => Ok(AuthMethod::UsernamePassword),
            _ => Err(AppError::UnsupportedAuthMethod(s.to_string())),
        }
    }
}

/// Credential bag handed to the authenticator
///
/// Which fields are read depends on the [`AuthMethod`]; the rest are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthCredentials {
    /// Bearer token
    pub token: Option<String>,
    /// Pre-encoded basic credentials
    pub encoded: Option<String>,
    /// Cookie header value
    pub cookie: Option<String>,
    /// Username
    pub username: Option<String>,
    /// Password
    pub password: Option<String>,
}

impl AuthCredentials {
    /// Credentials for [`AuthMethod::Bearer`]
    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..Default::default()
        }
    }

    /// Credentials for [`AuthMethod::Base64`]
    pub fn encoded(encoded: impl Into<String>) -> Self {
        Self {
            encoded: Some(encoded.into()),
            ..Default::default()
        }
    }

    /// Credentials for [`AuthMethod::Cookie`]
    pub fn cookie(cookie: impl Into<String>) -> Self {
        Self {
            cookie: Some(cookie.into()),
            ..Default::default()
        }
    }

    /// Credentials for [`AuthMethod::UsernamePassword`]
    pub fn username_password(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            password: Some(password.into()),
            ..Default::default()
        }
    }
}

/// Builds authorization header configurations
pub struct Authenticator;

impl Authenticator {
    /// Maps an auth method and its credentials to a header configuration
    ///
    /// # Returns
    /// * `Ok(RequestConfig)` - Config holding exactly one auth header
    /// * `Err(AppError::MissingCredential)` - If an input required by `method` is absent
    pub fn authenticate(
        method: AuthMethod,
        credentials: &AuthCredentials,
    ) -> Result<RequestConfig, AppError> {
        match method {
            AuthMethod::Bearer => Self::bearer(credentials.token.as_deref()),
            AuthMethod::Base64 => Self::base64(credentials.encoded.as_deref()),
            AuthMethod::Cookie => Self::cookie(credentials.cookie.as_deref()),
            AuthMethod::UsernamePassword => Self::username_password(
                credentials.username.as_deref(),
                credentials.password.as_deref(),
            ),
        }
    }

    /// Same as [`Authenticator::authenticate`], with the method given as a tag
    ///
    /// # Returns
    /// * `Err(AppError::UnsupportedAuthMethod)` - If `tag` names no known method
    pub fn authenticate_tag(
        tag: &str,
        credentials: &AuthCredentials,
    ) -> Result<RequestConfig, AppError> {
        Self::authenticate(tag.parse()?, credentials)
    }

    /// `Authorization: Bearer <token>`
    pub fn bearer(token: Option<&str>) -> Result<RequestConfig, AppError> {
        let token = required(token, "bearer token is required for BEARER authentication")?;
        Ok(RequestConfig::new().with_header(AUTHORIZATION.as_str(), &format!("Bearer {token}")))
    }

    /// `Authorization: Basic <encoded>`
    pub fn base64(encoded: Option<&str>) -> Result<RequestConfig, AppError> {
        let encoded = required(
            encoded,
            "encoded credentials are required for BASE64 authentication",
        )?;
        Ok(RequestConfig::new().with_header(AUTHORIZATION.as_str(), &format!("Basic {encoded}")))
    }

    /// `Cookie: <cookie>`
    pub fn cookie(cookie: Option<&str>) -> Result<RequestConfig, AppError> {
        let cookie = required(cookie, "cookie is required for COOKIE authentication")?;
        Ok(RequestConfig::new().with_header(COOKIE.as_str(), cookie))
    }

    /// `Authorization: Basic base64(username:password)`
    pub fn username_password(
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<RequestConfig, AppError> {
        let message = "username and password are required for USERNAME_PASSWORD authentication";
        let username = required(username, message)?;
        let password = required(password, message)?;
        let encoded = encode_basic(username, password);
        Ok(RequestConfig::new().with_header(AUTHORIZATION.as_str(), &format!("Basic {encoded}")))
    }
}

/// Standard padded base64 of `username:password`
#[must_use]
pub fn encode_basic(username: &str, password: &str) -> String {
    general_purpose::STANDARD.encode(format!("{username}:{password}"))
}

fn required<'a>(value: Option<&'a str>, message: &str) -> Result<&'a str, AppError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::MissingCredential(message.to_string())),
    }
}
