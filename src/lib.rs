/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # booking-client
//!
//! A typed client for a REST booking API, built for test automation.
//!
//! The crate wraps `reqwest` with:
//! - pluggable authentication (bearer, basic, cookie, username/password exchange)
//! - a token cache keyed by the credential pair, in memory or on disk
//! - a single request pipeline that measures round-trip time and parses
//!   response bodies into typed models, raw JSON or raw text
//! - domain services for the `/booking` and `/auth` endpoints
//!
//! Every call yields a [`ResponseEnvelope`](model::envelope::ResponseEnvelope),
//! including non-2xx answers, so tests can assert on status codes directly.
//!
//! ```rust,ignore
//! use booking_client::prelude::*;
//!
//! let config = Config::from_env()?;
//! let bookings = BookingServiceImpl::new(Arc::new(config))?;
//! bookings.authenticate(AuthMethod::UsernamePassword, None).await?;
//!
//! let response = bookings.get_booking(1, None).await?;
//! assert_eq!(response.status(), 200);
//! ```

/// Application layer: configuration, authentication and services
pub mod application;

/// Constants used across the crate
pub mod constants;

/// Error types
pub mod error;

/// Request/response models and the HTTP pipeline
pub mod model;

/// Commonly used re-exports
pub mod prelude;

/// Token persistence
pub mod storage;

/// Miscellaneous helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
