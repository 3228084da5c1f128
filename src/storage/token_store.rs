/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Cache of auth tokens obtained by username/password exchange
//!
//! Entries are keyed by a SHA-256 digest of the API base URL and the credential
//! pair, so a token is only ever handed back for the server and the exact
//! username and password that produced it, and the password itself is never
//! written anywhere.

use crate::error::AppError;
use crate::storage::config::{TokenStoreConfig, TokenStoreKind};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex as StdMutex, PoisonError};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, warn};

/// A cached token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredToken {
    /// Session token
    pub token: String,
    /// When the token was stored
    pub created_at: DateTime<Utc>,
    /// Lifetime in seconds, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl_secs: Option<u64>,
}

impl StoredToken {
    /// Creates an entry stamped with the current time
    pub fn new(token: &str, ttl_secs: Option<u64>) -> Self {
        Self {
            token: token.to_string(),
            created_at: Utc::now(),
            ttl_secs,
        }
    }

    /// True once `ttl_secs` has elapsed; entries without a ttl never expire
    #[must_use]
    pub fn is_expired(&self) -> bool {
        match self.ttl_secs {
            Some(ttl) => {
                let ttl = Duration::seconds(i64::try_from(ttl).unwrap_or(i64::MAX));
                self.created_at + ttl <= Utc::now()
            }
            None => false,
        }
    }
}

/// Lookup key for a credential pair on one server
///
/// Hex SHA-256 of `scope` (the API base URL), `username` and `password`, each
/// length-prefixed.
#[must_use]
pub fn token_key(scope: &str, username: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    for part in [scope, username, password] {
        hasher.update((part.len() as u64).to_be_bytes());
        hasher.update(part.as_bytes());
    }
    hex::encode(hasher.finalize())
}

/// Token cache contract
///
/// `scope` is the base URL of the API that issued the token; the same
/// credentials on another server are a different entry. Lookups and stores are
/// atomic per key; concurrent stores for the same key resolve as
/// last-write-wins.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Returns the cached token for the pair, if any and not expired
    async fn get_cached_token(&self, scope: &str, username: &str, password: &str)
    -> Option<String>;

    /// Caches `token` for the pair, replacing any previous entry
    async fn store_token(
        &self,
        scope: &str,
        username: &str,
        password: &str,
        token: &str,
    ) -> Result<(), AppError>;

    /// Drops the entry for the pair; returns whether one existed
    async fn remove_token(
        &self,
        scope: &str,
        username: &str,
        password: &str,
    ) -> Result<bool, AppError>;

    /// Drops every entry
    async fn clear(&self) -> Result<(), AppError>;
}

/// Process-lifetime token cache
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    entries: RwLock<HashMap<String, StoredToken>>,
    ttl_secs: Option<u64>,
}

impl MemoryTokenStore {
    /// Creates an empty cache whose entries never expire
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty cache whose entries expire after `ttl_secs`
    pub fn with_ttl(ttl_secs: u64) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl_secs: Some(ttl_secs),
        }
    }

    /// Number of entries, expired ones included
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// True when nothing is cached
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn get_cached_token(
        &self,
        scope: &str,
        username: &str,
        password: &str,
    ) -> Option<String> {
        let entries = self.entries.read().await;
        entries
            .get(&token_key(scope, username, password))
            .filter(|entry| !entry.is_expired())
            .map(|entry| entry.token.clone())
    }

    async fn store_token(
        &self,
        scope: &str,
        username: &str,
        password: &str,
        token: &str,
    ) -> Result<(), AppError> {
        let mut entries = self.entries.write().await;
        entries.insert(
            token_key(scope, username, password),
            StoredToken::new(token, self.ttl_secs),
        );
        Ok(())
    }

    async fn remove_token(
        &self,
        scope: &str,
        username: &str,
        password: &str,
    ) -> Result<bool, AppError> {
        let mut entries = self.entries.write().await;
        Ok(entries.remove(&token_key(scope, username, password)).is_some())
    }

    async fn clear(&self) -> Result<(), AppError> {
        self.entries.write().await.clear();
        Ok(())
    }
}

/// Token cache persisted as a JSON object `{key: StoredToken}` on disk
///
/// Every operation re-reads the file, so tokens written by an earlier run (or
/// another process) are picked up. Writes go to a sibling temp file that is
/// then renamed over the original.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    ttl_secs: Option<u64>,
    lock: Mutex<()>,
}

impl FileTokenStore {
    /// Creates a cache backed by `path`; the file is created on first store
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ttl_secs: None,
            lock: Mutex::new(()),
        }
    }

    /// Sets the lifetime of newly stored entries
    #[must_use]
    pub fn with_ttl_secs(mut self, ttl_secs: Option<u64>) -> Self {
        self.ttl_secs = ttl_secs;
        self
    }

    /// Location of the token file
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> HashMap<String, StoredToken> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return HashMap::new(),
            Err(e) => {
                warn!("Cannot read token file {}: {}", self.path.display(), e);
                return HashMap::new();
            }
        };
        if content.trim().is_empty() {
            return HashMap::new();
        }
        serde_json::from_str(&content).unwrap_or_else(|e| {
            warn!(
                "Token file {} is corrupt, ignoring it: {}",
                self.path.display(),
                e
            );
            HashMap::new()
        })
    }

    async fn save(&self, entries: &HashMap<String, StoredToken>) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let content = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, content).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        debug!(
            "Saved {} token(s) to {}",
            entries.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn get_cached_token(
        &self,
        scope: &str,
        username: &str,
        password: &str,
    ) -> Option<String> {
        let _guard = self.lock.lock().await;
        let entries = self.load().await;
        entries
            .get(&token_key(scope, username, password))
            .filter(|entry| !entry.is_expired())
            .map(|entry| entry.token.clone())
    }

    async fn store_token(
        &self,
        scope: &str,
        username: &str,
        password: &str,
        token: &str,
    ) -> Result<(), AppError> {
        let _guard = self.lock.lock().await;
        let mut entries = self.load().await;
        entries.insert(
            token_key(scope, username, password),
            StoredToken::new(token, self.ttl_secs),
        );
        self.save(&entries).await
    }

    async fn remove_token(
        &self,
        scope: &str,
        username: &str,
        password: &str,
    ) -> Result<bool, AppError> {
        let _guard = self.lock.lock().await;
        let mut entries = self.load().await;
        let removed = entries.remove(&token_key(scope, username, password)).is_some();
        if removed {
            self.save(&entries).await?;
        }
        Ok(removed)
    }

    async fn clear(&self) -> Result<(), AppError> {
        let _guard = self.lock.lock().await;
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

static SHARED_MEMORY: Lazy<StdMutex<HashMap<Option<u64>, Arc<MemoryTokenStore>>>> =
    Lazy::new(|| StdMutex::new(HashMap::new()));

static SHARED_FILES: Lazy<StdMutex<HashMap<(PathBuf, Option<u64>), Arc<FileTokenStore>>>> =
    Lazy::new(|| StdMutex::new(HashMap::new()));

/// Returns the process-wide token store for `config`
///
/// Services built from equal configurations share one store, so a token
/// obtained by one service is a cache hit for the next one talking to the same
/// base URL. File stores are keyed by path and ttl.
pub fn shared_token_store(config: &TokenStoreConfig) -> Arc<dyn TokenStore> {
    match config.kind {
        TokenStoreKind::Memory => {
            let mut stores = SHARED_MEMORY
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            let store = stores.entry(config.ttl_secs).or_insert_with(|| {
                Arc::new(match config.ttl_secs {
                    Some(ttl) => MemoryTokenStore::with_ttl(ttl),
                    None => MemoryTokenStore::new(),
                })
            });
            store.clone()
        }
        TokenStoreKind::File => {
            let mut stores = SHARED_FILES
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            let key = (config.path.clone(), config.ttl_secs);
            let store = stores.entry(key).or_insert_with(|| {
                Arc::new(FileTokenStore::new(config.path.clone()).with_ttl_secs(config.ttl_secs))
            });
            store.clone()
        }
    }
}
