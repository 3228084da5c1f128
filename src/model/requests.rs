/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::model::request_config::RequestConfig;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Body of `POST /auth`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CredentialsModel {
    /// Username
    pub username: String,
    /// Password
    pub password: String,
}

impl CredentialsModel {
    /// Creates the credentials body
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Check-in and check-out dates, `YYYY-MM-DD`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct BookingDates {
    /// Check-in date
    pub checkin: String,
    /// Check-out date
    pub checkout: String,
}

impl BookingDates {
    /// Creates a date range
    pub fn new(checkin: impl Into<String>, checkout: impl Into<String>) -> Self {
        Self {
            checkin: checkin.into(),
            checkout: checkout.into(),
        }
    }
}

/// Request body for creating or (partially) updating a booking
///
/// Every field is optional; unset fields are left out of the JSON so a PATCH
/// only touches what the caller set.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct BookingModel {
    /// Guest first name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    /// Guest last name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    /// Total price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub totalprice: Option<i64>,
    /// Whether a deposit was paid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depositpaid: Option<bool>,
    /// Stay dates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bookingdates: Option<BookingDates>,
    /// Free text requests
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additionalneeds: Option<String>,
}

impl BookingModel {
    /// Creates an empty booking body
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the first name
    pub fn with_firstname(mut self, firstname: &str) -> Self {
        self.firstname = Some(firstname.to_string());
        self
    }

    /// Set the last name
    pub fn with_lastname(mut self, lastname: &str) -> Self {
        self.lastname = Some(lastname.to_string());
        self
    }

    /// Set the total price
    pub fn with_totalprice(mut self, totalprice: i64) -> Self {
        self.totalprice = Some(totalprice);
        self
    }

    /// Set the deposit flag
    pub fn with_depositpaid(mut self, depositpaid: bool) -> Self {
        self.depositpaid = Some(depositpaid);
        self
    }

    /// Set the stay dates
    pub fn with_bookingdates(mut self, checkin: &str, checkout: &str) -> Self {
        self.bookingdates = Some(BookingDates::new(checkin, checkout));
        self
    }

    /// Set the additional needs
    pub fn with_additionalneeds(mut self, additionalneeds: &str) -> Self {
        self.additionalneeds = Some(additionalneeds.to_string());
        self
    }
}

/// Query filter for `GET /booking`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingFilter {
    /// Match on first name
    pub firstname: Option<String>,
    /// Match on last name
    pub lastname: Option<String>,
    /// Check-in on or after this date
    pub checkin: Option<String>,
    /// Check-out on or before this date
    pub checkout: Option<String>,
}

impl BookingFilter {
    /// Creates an empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the first name
    pub fn with_firstname(mut self, firstname: &str) -> Self {
        self.firstname = Some(firstname.to_string());
        self
    }

    /// Set the last name
    pub fn with_lastname(mut self, lastname: &str) -> Self {
        self.lastname = Some(lastname.to_string());
        self
    }

    /// Set the check-in date
    pub fn with_checkin(mut self, checkin: &str) -> Self {
        self.checkin = Some(checkin.to_string());
        self
    }

    /// Set the check-out date
    pub fn with_checkout(mut self, checkout: &str) -> Self {
        self.checkout = Some(checkout.to_string());
        self
    }

    /// Query pairs for the fields that are set, in declaration order
    pub fn to_query(&self) -> Vec<(String, String)> {
        [
            ("firstname", &self.firstname),
            ("lastname", &self.lastname),
            ("checkin", &self.checkin),
            ("checkout", &self.checkout),
        ]
        .into_iter()
        .filter_map(|(k, v)| v.as_ref().map(|v| (k.to_string(), v.clone())))
        .collect()
    }

    /// Appends the filter to `config` as query parameters
    pub fn apply(&self, config: RequestConfig) -> RequestConfig {
        self.to_query()
            .into_iter()
            .fold(config, |config, (k, v)| config.with_query(&k, &v))
    }
}
