use crate::application::auth::{AuthCredentials, AuthMethod};
use crate::application::client::ServiceClient;
use crate::application::config::Config;
use crate::application::interfaces::booking::BookingService;
use crate::constants::BOOKING_PATH;
use crate::error::AppError;
use crate::model::envelope::ResponseEnvelope;
use crate::model::request_config::RequestConfig;
use crate::model::requests::{BookingFilter, BookingModel};
use crate::model::responses::{BookingDetails, BookingIdResponse, BookingResponse};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the booking service on top of a [`ServiceClient`]
pub struct BookingServiceImpl {
    client: ServiceClient,
}

impl BookingServiceImpl {
    /// Creates a new booking service for `{base_url}/booking`
    pub fn new(config: Arc<Config>) -> Result<Self, AppError> {
        Ok(Self {
            client: ServiceClient::new(config, BOOKING_PATH)?,
        })
    }

    /// Wraps an existing service client
    pub fn from_client(client: ServiceClient) -> Self {
        Self { client }
    }

    /// The underlying service client
    pub fn client(&self) -> &ServiceClient {
        &self.client
    }

    /// Drops the installed auth headers
    pub async fn logout(&self) {
        self.client.logout().await;
    }
}

#[async_trait]
impl BookingService for BookingServiceImpl {
    async fn authenticate(
        &self,
        method: AuthMethod,
        credentials: Option<AuthCredentials>,
    ) -> Result<RequestConfig, AppError> {
        self.client.authenticate(method, credentials).await
    }

    async fn get_booking_ids(
        &self,
        filter: Option<&BookingFilter>,
        config: Option<&RequestConfig>,
    ) -> Result<ResponseEnvelope<Vec<BookingIdResponse>>, AppError> {
        info!("Getting booking ids");

        let base = match config {
            Some(config) => config.clone(),
            None => self.client.default_config().await,
        };
        let config = match filter {
            Some(filter) => filter.apply(base),
            None => base,
        };

        let response = self
            .client
            .get::<Vec<BookingIdResponse>>(self.client.url(), Some(&config))
            .await?;

        debug!(
            "Booking ids obtained: {} ids (status {})",
            response.model().map_or(0, Vec::len),
            response.status()
        );
        Ok(response)
    }

    async fn get_booking(
        &self,
        booking_id: i64,
        config: Option<&RequestConfig>,
    ) -> Result<ResponseEnvelope<BookingDetails>, AppError> {
        debug!("Getting booking {}", booking_id);
        self.client
            .get(&self.client.resource_url(booking_id), config)
            .await
    }

    async fn add_booking(
        &self,
        booking: &BookingModel,
        config: Option<&RequestConfig>,
    ) -> Result<ResponseEnvelope<BookingResponse>, AppError> {
        info!("Creating booking");
        let response = self
            .client
            .post::<_, BookingResponse>(self.client.url(), booking, config)
            .await?;
        if let Some(created) = response.model() {
            debug!("Booking created with id {}", created.bookingid);
        }
        Ok(response)
    }

    async fn update_booking(
        &self,
        booking_id: i64,
        booking: &BookingModel,
        config: Option<&RequestConfig>,
    ) -> Result<ResponseEnvelope<BookingDetails>, AppError> {
        info!("Updating booking {}", booking_id);
        self.client
            .put(&self.client.resource_url(booking_id), booking, config)
            .await
    }

    async fn partial_update_booking(
        &self,
        booking_id: i64,
        booking: &BookingModel,
        config: Option<&RequestConfig>,
    ) -> Result<ResponseEnvelope<BookingDetails>, AppError> {
        info!("Partially updating booking {}", booking_id);
        self.client
            .patch(&self.client.resource_url(booking_id), booking, config)
            .await
    }

    async fn delete_booking(
        &self,
        booking_id: i64,
        config: Option<&RequestConfig>,
    ) -> Result<ResponseEnvelope<Value>, AppError> {
        info!("Deleting booking {}", booking_id);
        self.client
            .delete_raw(&self.client.resource_url(booking_id), config)
            .await
    }
}
