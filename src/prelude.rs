/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Booking Client Prelude
//!
//! Re-exports the types needed for most interactions with the booking API.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use booking_client::prelude::*;
//!
//! let config = Arc::new(Config::from_env()?);
//! let bookings = BookingServiceImpl::new(config)?;
//! bookings.authenticate(AuthMethod::UsernamePassword, None).await?;
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the booking API client
pub use crate::application::config::{Config, Credentials, RestApiConfig};

/// Token cache configuration
pub use crate::storage::config::{TokenStoreConfig, TokenStoreKind};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{AppError, AppResult};

// ============================================================================
// AUTHENTICATION
// ============================================================================

/// Header construction for each auth method
pub use crate::application::auth::{AuthCredentials, AuthMethod, Authenticator, encode_basic};

/// Token cache
pub use crate::storage::token_store::{
    FileTokenStore, MemoryTokenStore, StoredToken, TokenStore, shared_token_store, token_key,
};

// ============================================================================
// REQUEST PIPELINE
// ============================================================================

/// Service client
pub use crate::application::client::ServiceClient;

/// Per-request configuration
pub use crate::model::request_config::RequestConfig;

/// Response envelope
pub use crate::model::envelope::{ResponseData, ResponseEnvelope};

// ============================================================================
// SERVICES
// ============================================================================

/// Service traits
pub use crate::application::services::{AuthService, BookingService};

/// Service implementations
pub use crate::application::services::{AuthServiceImpl, BookingServiceImpl};

// ============================================================================
// MODELS
// ============================================================================

/// Request models
pub use crate::model::requests::{BookingDates, BookingFilter, BookingModel, CredentialsModel};

/// Response models
pub use crate::model::responses::{
    AuthFailure, AuthResponse, BookingDetails, BookingIdResponse, BookingResponse, ErrorResponse,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging and id helpers
pub use crate::utils::{get_id, setup_logger, unique_name};

// ============================================================================
// EXTERNAL
// ============================================================================

pub use reqwest::Method;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
