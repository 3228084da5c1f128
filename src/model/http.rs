/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::JSON_CONTENT_TYPE;
use crate::error::AppError;
use crate::model::envelope::{ResponseData, ResponseEnvelope};
use crate::model::request_config::RequestConfig;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap};
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::debug;

/// What came back from the transport, before body parsing
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Full body as text (empty for HEAD and empty answers)
    pub body: String,
    /// Time from request construction until the body was read
    pub elapsed: Duration,
}

impl RawResponse {
    /// Elapsed time in whole milliseconds
    #[must_use]
    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.elapsed.as_millis()).unwrap_or(u64::MAX)
    }
}

/// Sends one HTTP request and reads the whole body
///
/// Every request is sent with `Content-Type` and `Accept` set to
/// `application/json`; headers, cookies and query parameters from `config`
/// are applied on top. The body, when present, is serialized as JSON.
///
/// The clock starts before the request is built and stops after the body has
/// been read, so the elapsed time includes local serialization.
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `method` - HTTP method (GET, POST, PUT, PATCH, DELETE, HEAD, OPTIONS)
/// * `url` - Full URL to request
/// * `config` - Headers, cookies and query parameters for this call
/// * `body` - Optional request body
///
/// # Returns
///
/// * `Ok(RawResponse)` - For any HTTP status, including 4xx and 5xx
/// * `Err(AppError::Network)` - If the transport fails (timeout, DNS, refused)
/// * `Err(AppError::InvalidInput)` - If `config` holds an invalid header
///
/// # Example
///
/// ```ignore
/// use booking_client::model::http::make_http_request;
/// use booking_client::model::request_config::RequestConfig;
/// use reqwest::{Client, Method};
///
/// let client = Client::new();
/// let config = RequestConfig::new().with_header("Cookie", "token=abc123");
/// let response = make_http_request(
///     &client,
///     Method::GET,
///     "https://restful-booker.herokuapp.com/booking/1",
///     &config,
///     None::<&()>,
/// ).await?;
/// println!("{} in {} ms", response.status, response.elapsed_ms());
/// ```
pub async fn make_http_request<B: Serialize + ?Sized>(
    client: &Client,
    method: Method,
    url: &str,
    config: &RequestConfig,
    body: Option<&B>,
) -> Result<RawResponse, AppError> {
    let headers = config.header_map()?;
    let start = Instant::now();

    debug!("{} {}", method, url);

    let mut request = client
        .request(method.clone(), url)
        .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
        .header(ACCEPT, JSON_CONTENT_TYPE)
        .headers(headers);

    if !config.query.is_empty() {
        request = request.query(&config.query);
    }

    if let Some(b) = body {
        request = request.body(serde_json::to_vec(b)?);
    }

    let response = request.send().await?;
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.text().await?;
    let elapsed = start.elapsed();

    debug!(
        "{} {} -> {} ({} bytes, {} ms)",
        method,
        url,
        status,
        body.len(),
        elapsed.as_millis()
    );

    Ok(RawResponse {
        status,
        headers,
        body,
        elapsed,
    })
}

/// Parses a body without a requested shape: JSON when possible, text otherwise
#[must_use]
pub fn parse_untyped(body: &str) -> ResponseData<Value> {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => ResponseData::Json(value),
        Err(_) => ResponseData::Text(body.to_string()),
    }
}

/// Parses a body into the shape `T`
///
/// * Not JSON (or empty) - `Text` with the body verbatim
/// * JSON matching `T` - `Model`
/// * JSON not matching `T`, 2xx status - `MalformedResponse` error
/// * JSON not matching `T`, other status - `Json` with the decoded value
///
/// A sequence shape is expressed as `T = Vec<U>`; every element is validated.
pub fn parse_typed<T: DeserializeOwned>(
    status: StatusCode,
    body: &str,
) -> Result<ResponseData<T>, AppError> {
    let value = match serde_json::from_str::<Value>(body) {
        Ok(value) => value,
        Err(_) => return Ok(ResponseData::Text(body.to_string())),
    };

    match serde_json::from_value::<T>(value.clone()) {
        Ok(model) => Ok(ResponseData::Model(model)),
        Err(e) if status.is_success() => Err(AppError::MalformedResponse(format!(
            "status {status}: body does not match {}: {e}",
            std::any::type_name::<T>()
        ))),
        Err(e) => {
            debug!("Non-success body kept as raw JSON ({status}): {e}");
            Ok(ResponseData::Json(value))
        }
    }
}

/// Wraps a raw response into an envelope with a typed body
pub fn into_typed_envelope<T: DeserializeOwned>(
    raw: RawResponse,
) -> Result<ResponseEnvelope<T>, AppError> {
    let data = parse_typed::<T>(raw.status, &raw.body)?;
    let elapsed = raw.elapsed_ms();
    Ok(ResponseEnvelope::new(
        raw.status.as_u16(),
        raw.headers,
        data,
        elapsed,
    ))
}

/// Wraps a raw response into an envelope with an untyped body
#[must_use]
pub fn into_untyped_envelope(raw: RawResponse) -> ResponseEnvelope<Value> {
    let data = parse_untyped(&raw.body);
    let elapsed = raw.elapsed_ms();
    ResponseEnvelope::new(raw.status.as_u16(), raw.headers, data, elapsed)
}
