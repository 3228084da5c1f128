/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use reqwest::header::HeaderMap;
use serde_json::Value;

/// Body of a response, as far as it could be parsed
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseData<T> {
    /// Body validated against the requested shape
    Model(T),
    /// Body is JSON but no shape was requested, or a non-2xx body did not fit it
    Json(Value),
    /// Body is not JSON (this includes the empty body)
    Text(String),
}

impl<T> ResponseData<T> {
    /// The typed model, if the body matched the requested shape
    pub fn as_model(&self) -> Option<&T> {
        match self {
            ResponseData::Model(m) => Some(m),
            _ => None,
        }
    }

    /// The untyped JSON value, if any
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ResponseData::Json(v) => Some(v),
            _ => None,
        }
    }

    /// The raw text, if the body was not JSON
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ResponseData::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// Uniform result of every call: status, headers, parsed body and timing
#[derive(Debug, Clone)]
pub struct ResponseEnvelope<T> {
    status: u16,
    headers: HeaderMap,
    data: ResponseData<T>,
    response_time: u64,
}

impl<T> ResponseEnvelope<T> {
    /// Creates an envelope; `response_time` is in milliseconds
    pub fn new(status: u16, headers: HeaderMap, data: ResponseData<T>, response_time: u64) -> Self {
        Self {
            status,
            headers,
            data,
            response_time,
        }
    }

    /// HTTP status code
    pub fn status(&self) -> u16 {
        self.status
    }

    /// True for 2xx statuses
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Response headers
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// A single header value, if present and valid UTF-8
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Parsed body
    pub fn data(&self) -> &ResponseData<T> {
        &self.data
    }

    /// Client-observed round trip in milliseconds
    pub fn response_time(&self) -> u64 {
        self.response_time
    }

    /// Shortcut for `data().as_model()`
    pub fn model(&self) -> Option<&T> {
        self.data.as_model()
    }

    /// Shortcut for `data().as_text()`
    pub fn text(&self) -> Option<&str> {
        self.data.as_text()
    }

    /// Consumes the envelope and returns the typed model
    ///
    /// # Returns
    /// * `Err(AppError::MalformedResponse)` - If the body was not parsed into `T`
    pub fn into_model(self) -> Result<T, AppError> {
        match self.data {
            ResponseData::Model(m) => Ok(m),
            ResponseData::Json(v) => Err(AppError::MalformedResponse(format!(
                "status {}: expected a typed body, got {v}",
                self.status
            ))),
            ResponseData::Text(t) => Err(AppError::MalformedResponse(format!(
                "status {}: expected a typed body, got text {t:?}",
                self.status
            ))),
        }
    }
}

impl ResponseEnvelope<Value> {
    /// The JSON body, if any
    pub fn json(&self) -> Option<&Value> {
        self.data.as_json()
    }

    /// A top-level field of a JSON object body
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.json().and_then(|v| v.get(key))
    }
}
