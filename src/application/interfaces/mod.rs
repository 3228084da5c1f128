/// Auth service interface
pub mod auth;
/// Booking service interface
pub mod booking;
