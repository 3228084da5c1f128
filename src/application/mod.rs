/// Authentication header construction
pub mod auth;
/// Service client: request pipeline and authentication flow
pub mod client;
/// Application configuration module
pub mod config;
/// Service traits
pub mod interfaces;
/// Domain services
pub mod services;
