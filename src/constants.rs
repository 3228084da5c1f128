/// User agent string sent with every request
pub const USER_AGENT: &str = concat!("booking-client/", env!("CARGO_PKG_VERSION"));
/// Default transport timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Path of the authentication endpoint, relative to the base URL
pub const AUTH_PATH: &str = "auth";
/// Path of the booking resource, relative to the base URL
pub const BOOKING_PATH: &str = "booking";
/// Directory, under the system temp dir, holding the token file
pub const TOKEN_STORE_DIR: &str = "booking-client";
/// File name of the on-disk token cache
pub const TOKEN_STORE_FILE: &str = "tokens.json";
/// Name of the cookie carrying the session token
pub const TOKEN_COOKIE: &str = "token";
/// Media type used for request and response bodies
pub const JSON_CONTENT_TYPE: &str = "application/json";
