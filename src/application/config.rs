/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::DEFAULT_TIMEOUT_SECS;
use crate::error::AppError;
use crate::storage::config::TokenStoreConfig;
use crate::utils::config::{get_env_or_default, get_env_or_none, get_env_required};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Default username/password used by `authenticate` when none are passed
pub struct Credentials {
    /// Username for the booking API
    pub username: String,
    /// Password for the booking API
    pub password: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST transport
pub struct RestApiConfig {
    /// Timeout in seconds for a single request
    pub timeout_secs: u64,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the booking API client
pub struct Config {
    /// Base URL of the API, without trailing slash
    pub base_url: String,
    /// Default credentials for username/password authentication
    pub credentials: Option<Credentials>,
    /// REST transport configuration
    pub rest_api: RestApiConfig,
    /// Token cache configuration
    pub token_store: TokenStoreConfig,
}

impl Config {
    /// Loads the configuration from the environment (and `.env` if present)
    ///
    /// Variables:
    /// * `BASE_URL` - required
    /// * `USERNAME` / `PASSWORD` - optional default credentials
    /// * `REST_TIMEOUT_SECS` - request timeout, default 30
    /// * `TOKEN_STORE` - `memory` or `file`, default `file`
    /// * `TOKEN_STORE_PATH` - token file location
    /// * `TOKEN_TTL_SECS` - optional lifetime of cached tokens
    ///
    /// # Returns
    /// * `Err(AppError::Configuration)` - If `BASE_URL` is missing or invalid
    pub fn from_env() -> Result<Self, AppError> {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let base_url = get_env_required("BASE_URL")?;
        let mut config = Self::with_base_url(&base_url)?;
        config.token_store = TokenStoreConfig::default();

        let username: Option<String> = get_env_or_none("USERNAME");
        let password: Option<String> = get_env_or_none("PASSWORD");
        if let (Some(username), Some(password)) = (username, password) {
            config.credentials = Some(Credentials { username, password });
        }

        config.rest_api.timeout_secs = get_env_or_default("REST_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS);

        if let Some(kind) = get_env_or_none::<String>("TOKEN_STORE") {
            config.token_store.kind = kind.parse()?;
        }
        if let Some(path) = get_env_or_none::<PathBuf>("TOKEN_STORE_PATH") {
            config.token_store.path = path;
        }
        config.token_store.ttl_secs = get_env_or_none("TOKEN_TTL_SECS");

        Ok(config)
    }

    /// Creates a configuration for `base_url` without reading the environment
    ///
    /// The token cache defaults to memory.
    pub fn with_base_url(base_url: &str) -> Result<Self, AppError> {
        let base_url = normalize_base_url(base_url)?;
        Ok(Self {
            base_url,
            credentials: None,
            rest_api: RestApiConfig::default(),
            token_store: TokenStoreConfig::memory(),
        })
    }

    /// Sets the default credentials
    #[must_use]
    pub fn with_credentials(mut self, username: &str, password: &str) -> Self {
        self.credentials = Some(Credentials {
            username: username.to_string(),
            password: password.to_string(),
        });
        self
    }

    /// Sets the token cache backend
    #[must_use]
    pub fn with_token_store(mut self, token_store: TokenStoreConfig) -> Self {
        self.token_store = token_store;
        self
    }

    /// Joins `path` onto the base URL
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        let path = path.trim_matches('/');
        if path.is_empty() {
            self.base_url.clone()
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

fn normalize_base_url(base_url: &str) -> Result<String, AppError> {
    let trimmed = base_url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(AppError::Configuration(
            "a valid base_url must be provided".to_string(),
        ));
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(AppError::Configuration(format!(
            "base_url must start with http:// or https://, got {trimmed}"
        )));
    }
    Ok(trimmed.to_string())
}
