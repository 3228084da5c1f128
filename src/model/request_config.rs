/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use reqwest::header::{COOKIE, HeaderMap, HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Headers, cookies and query parameters applied to an outgoing request
///
/// A service keeps one of these as its default (filled in by
/// `authenticate`); callers may pass their own per call, which replaces the
/// default. Use [`RequestConfig::merge`] to layer one on top of another.
#[derive(
    DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default, PartialEq, Eq,
)]
pub struct RequestConfig {
    /// Header name to value
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
    /// Cookie name to value, sent as a single `Cookie` header
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub cookies: BTreeMap<String, String>,
    /// Query parameters, in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub query: Vec<(String, String)>,
}

impl RequestConfig {
    /// Creates an empty configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a header, replacing any previous value under the same name
    #[must_use]
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_string(), value.to_string());
        self
    }

    /// Sets a cookie
    #[must_use]
    pub fn with_cookie(mut self, name: &str, value: &str) -> Self {
        self.cookies.insert(name.to_string(), value.to_string());
        self
    }

    /// Appends a query parameter
    #[must_use]
    pub fn with_query(mut self, name: &str, value: &str) -> Self {
        self.query.push((name.to_string(), value.to_string()));
        self
    }

    /// Looks up a header by name, ignoring ASCII case
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// True when no header, cookie or query parameter is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.cookies.is_empty() && self.query.is_empty()
    }

    /// Returns `self` overlaid with `other`
    ///
    /// Headers and cookies from `other` win on name clashes; query parameters
    /// are concatenated.
    #[must_use]
    pub fn merge(&self, other: &RequestConfig) -> RequestConfig {
        let mut merged = self.clone();
        for (name, value) in &other.headers {
            merged.headers.retain(|k, _| !k.eq_ignore_ascii_case(name));
            merged.headers.insert(name.clone(), value.clone());
        }
        merged
            .cookies
            .extend(other.cookies.iter().map(|(k, v)| (k.clone(), v.clone())));
        merged.query.extend(other.query.iter().cloned());
        merged
    }

    /// Renders `cookies` as `a=1; b=2`, or `None` when there are none
    #[must_use]
    pub fn cookie_header(&self) -> Option<String> {
        if self.cookies.is_empty() {
            return None;
        }
        Some(
            self.cookies
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect::<Vec<_>>()
                .join("; "),
        )
    }

    /// Converts headers and cookies to a `HeaderMap`
    ///
    /// Cookies are appended to an explicit `Cookie` header when both are set.
    ///
    /// # Returns
    /// * `Err(AppError::InvalidInput)` - If a name or value is not valid HTTP
    pub fn header_map(&self) -> Result<HeaderMap, AppError> {
        let mut map = HeaderMap::with_capacity(self.headers.len() + 1);
        for (name, value) in &self.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| AppError::InvalidInput(format!("invalid header name {name}: {e}")))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|e| AppError::InvalidInput(format!("invalid value for {name}: {e}")))?;
            map.insert(header_name, header_value);
        }

        if let Some(cookies) = self.cookie_header() {
            let combined = match map.get(COOKIE).and_then(|v| v.to_str().ok()) {
                Some(existing) => format!("{existing}; {cookies}"),
                None => cookies,
            };
            let value = HeaderValue::from_str(&combined)
                .map_err(|e| AppError::InvalidInput(format!("invalid cookie value: {e}")))?;
            map.insert(COOKIE, value);
        }

        Ok(map)
    }
}
