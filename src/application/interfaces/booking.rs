use crate::application::auth::{AuthCredentials, AuthMethod};
use crate::error::AppError;
use crate::model::envelope::ResponseEnvelope;
use crate::model::request_config::RequestConfig;
use crate::model::requests::{BookingFilter, BookingModel};
use crate::model::responses::{BookingDetails, BookingIdResponse, BookingResponse};
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the booking service
///
/// Every operation takes an optional per-call [`RequestConfig`]; `None` uses
/// the configuration installed by [`BookingService::authenticate`].
#[async_trait]
pub trait BookingService: Send + Sync {
    /// Authenticates the service; later calls carry the resulting headers
    async fn authenticate(
        &self,
        method: AuthMethod,
        credentials: Option<AuthCredentials>,
    ) -> Result<RequestConfig, AppError>;

    /// Lists booking ids, optionally filtered by name or dates
    async fn get_booking_ids(
        &self,
        filter: Option<&BookingFilter>,
        config: Option<&RequestConfig>,
    ) -> Result<ResponseEnvelope<Vec<BookingIdResponse>>, AppError>;

    /// Gets one booking
    async fn get_booking(
        &self,
        booking_id: i64,
        config: Option<&RequestConfig>,
    ) -> Result<ResponseEnvelope<BookingDetails>, AppError>;

    /// Creates a booking
    async fn add_booking(
        &self,
        booking: &BookingModel,
        config: Option<&RequestConfig>,
    ) -> Result<ResponseEnvelope<BookingResponse>, AppError>;

    /// Replaces a booking
    async fn update_booking(
        &self,
        booking_id: i64,
        booking: &BookingModel,
        config: Option<&RequestConfig>,
    ) -> Result<ResponseEnvelope<BookingDetails>, AppError>;

    /// Updates the fields of a booking that are set in `booking`
    async fn partial_update_booking(
        &self,
        booking_id: i64,
        booking: &BookingModel,
        config: Option<&RequestConfig>,
    ) -> Result<ResponseEnvelope<BookingDetails>, AppError>;

    /// Deletes a booking
    ///
    /// The API answers with a plain-text body, so the envelope is untyped.
    async fn delete_booking(
        &self,
        booking_id: i64,
        config: Option<&RequestConfig>,
    ) -> Result<ResponseEnvelope<Value>, AppError>;
}
