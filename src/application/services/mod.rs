/// Module containing the auth service
pub mod auth_service;
/// Module containing the booking service
pub mod booking_service;

pub use crate::application::interfaces::auth::*;
pub use crate::application::interfaces::booking::*;
pub use auth_service::*;
pub use booking_service::*;
