/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::model::requests::BookingDates;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// A stored booking, as returned by `GET`, `PUT` and `PATCH /booking/{id}`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct BookingDetails {
    /// Guest first name
    pub firstname: String,
    /// Guest last name
    pub lastname: String,
    /// Total price
    pub totalprice: i64,
    /// Whether a deposit was paid
    pub depositpaid: bool,
    /// Stay dates
    pub bookingdates: BookingDates,
    /// Free text requests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additionalneeds: Option<String>,
}

/// Answer of `POST /booking`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookingResponse {
    /// Identifier assigned by the server
    pub bookingid: i64,
    /// The booking as stored
    pub booking: BookingDetails,
}

/// One entry of `GET /booking`
#[derive(DebugPretty, DisplaySimple, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct BookingIdResponse {
    /// Booking identifier
    pub bookingid: i64,
}

/// Successful answer of `POST /auth`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    /// Session token, sent back as the `token` cookie
    pub token: String,
}

/// Answer of `POST /auth` for rejected credentials (still HTTP 200)
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthFailure {
    /// Reason given by the server, e.g. `Bad credentials`
    pub reason: String,
}

/// Generic error body
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ErrorResponse {
    /// Status as reported in the body, either `"404"` or `404`
    #[serde(default)]
    pub status: serde_json::Value,
    /// Human readable message
    #[serde(default)]
    pub message: Option<String>,
    /// Detailed errors
    #[serde(default)]
    pub errors: Vec<serde_json::Value>,
}

impl ErrorResponse {
    /// Numeric status, whether the body sent it as a number or a string
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match &self.status {
            serde_json::Value::Number(n) => n.as_u64().and_then(|n| u16::try_from(n).ok()),
            serde_json::Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}
