/// Module containing token store configuration structures
pub mod config;
/// Credential-keyed token cache
pub mod token_store;

pub use token_store::{FileTokenStore, MemoryTokenStore, StoredToken, TokenStore, shared_token_store};
