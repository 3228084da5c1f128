use crate::constants::{TOKEN_STORE_DIR, TOKEN_STORE_FILE};
use crate::error::AppError;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// Where obtained auth tokens are kept
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum TokenStoreKind {
    /// Process-lifetime cache
    Memory,
    /// JSON file, survives across runs
    #[default]
    File,
}

impl FromStr for TokenStoreKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "memory" => Ok(TokenStoreKind::Memory),
            "file" => Ok(TokenStoreKind::File),
            other => Err(AppError::Configuration(format!(
                "unknown token store kind: {other}"
            ))),
        }
    }
}

/// Configuration of the token cache
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
pub struct TokenStoreConfig {
    /// Backend used for the cache
    pub kind: TokenStoreKind,
    /// Location of the token file when `kind` is `File`
    pub path: PathBuf,
    /// Age after which a cached token is ignored; `None` keeps tokens until
    /// the server rejects them
    #[serde(default)]
    pub ttl_secs: Option<u64>,
}

impl TokenStoreConfig {
    /// In-memory cache
    #[must_use]
    pub fn memory() -> Self {
        Self {
            kind: TokenStoreKind::Memory,
            path: default_token_path(),
            ttl_secs: None,
        }
    }

    /// File cache at `path`
    #[must_use]
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            kind: TokenStoreKind::File,
            path: path.into(),
            ttl_secs: None,
        }
    }

    /// Sets the token lifetime
    #[must_use]
    pub fn with_ttl_secs(mut self, ttl_secs: u64) -> Self {
        self.ttl_secs = Some(ttl_secs);
        self
    }
}

impl Default for TokenStoreConfig {
    fn default() -> Self {
        Self::file(default_token_path())
    }
}

/// `<temp dir>/booking-client/tokens.json`
#[must_use]
pub fn default_token_path() -> PathBuf {
    std::env::temp_dir()
        .join(TOKEN_STORE_DIR)
        .join(TOKEN_STORE_FILE)
}
