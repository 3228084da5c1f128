use crate::application::client::ServiceClient;
use crate::application::config::Config;
use crate::application::interfaces::auth::AuthService;
use crate::constants::AUTH_PATH;
use crate::error::AppError;
use crate::model::envelope::ResponseEnvelope;
use crate::model::request_config::RequestConfig;
use crate::model::requests::CredentialsModel;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

/// Implementation of the auth service
pub struct AuthServiceImpl {
    client: ServiceClient,
}

impl AuthServiceImpl {
    /// Creates a new auth service for `{base_url}/auth`
    pub fn new(config: Arc<Config>) -> Result<Self, AppError> {
        Ok(Self {
            client: ServiceClient::new(config, AUTH_PATH)?,
        })
    }

    /// Wraps an existing service client
    pub fn from_client(client: ServiceClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthService for AuthServiceImpl {
    async fn sign_in(
        &self,
        credentials: &CredentialsModel,
    ) -> Result<ResponseEnvelope<Value>, AppError> {
        info!("Signing in as {}", credentials.username);
        self.client
            .post_raw(self.client.url(), credentials, Some(&RequestConfig::new()))
            .await
    }
}
