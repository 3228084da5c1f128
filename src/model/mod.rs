/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// Uniform response wrapper
pub mod envelope;
/// HTTP dispatch and body parsing
pub mod http;
/// Per-request headers, cookies and query parameters
pub mod request_config;
/// Request models for API calls
pub mod requests;
/// Response models from API calls
pub mod responses;
