/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::auth::{AuthCredentials, AuthMethod, Authenticator};
use crate::application::config::Config;
use crate::constants::{AUTH_PATH, TOKEN_COOKIE, USER_AGENT};
use crate::error::AppError;
use crate::model::envelope::ResponseEnvelope;
use crate::model::http::{RawResponse, into_typed_envelope, into_untyped_envelope, make_http_request};
use crate::model::request_config::RequestConfig;
use crate::model::requests::CredentialsModel;
use crate::model::responses::{AuthFailure, AuthResponse};
use crate::storage::token_store::{TokenStore, shared_token_store};
use reqwest::header::{AUTHORIZATION, COOKIE};
use reqwest::{Client, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

/// HTTP pipeline bound to one API area
///
/// A service client owns:
/// - the resource URL (`{base_url}/{path}`)
/// - a default [`RequestConfig`], empty until [`ServiceClient::authenticate`] fills it
/// - a handle to the shared transport and to the token cache
///
/// Every request returns a [`ResponseEnvelope`], whatever the HTTP status.
pub struct ServiceClient {
    config: Arc<Config>,
    http_client: Client,
    url: String,
    default_config: RwLock<RequestConfig>,
    token_store: Arc<dyn TokenStore>,
}

impl ServiceClient {
    /// Creates a service client for `path` with its own transport
    ///
    /// # Arguments
    /// * `config` - Base URL, default credentials, timeout and token cache settings
    /// * `path` - Resource path relative to the base URL, e.g. `booking`
    ///
    /// # Returns
    /// * `Err(AppError::Network)` - If the HTTP client cannot be built
    pub fn new(config: Arc<Config>, path: &str) -> Result<Self, AppError> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout_secs))
            .build()?;
        Ok(Self::with_http_client(config, path, http_client))
    }

    /// Creates a service client for `path` on an existing transport
    pub fn with_http_client(config: Arc<Config>, path: &str, http_client: Client) -> Self {
        let token_store = shared_token_store(&config.token_store);
        let url = config.url_for(path);
        Self {
            config,
            http_client,
            url,
            default_config: RwLock::new(RequestConfig::new()),
            token_store,
        }
    }

    /// Replaces the token cache
    #[must_use]
    pub fn with_token_store(mut self, token_store: Arc<dyn TokenStore>) -> Self {
        self.token_store = token_store;
        self
    }

    /// A new, unauthenticated client for another path sharing transport and cache
    #[must_use]
    pub fn for_path(&self, path: &str) -> Self {
        Self {
            config: self.config.clone(),
            http_client: self.http_client.clone(),
            url: self.config.url_for(path),
            default_config: RwLock::new(RequestConfig::new()),
            token_store: self.token_store.clone(),
        }
    }

    /// Resource URL of this service
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Base URL of the API
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Configuration this client was built from
    pub fn config(&self) -> Arc<Config> {
        self.config.clone()
    }

    /// The token cache in use
    pub fn token_store(&self) -> Arc<dyn TokenStore> {
        self.token_store.clone()
    }

    /// `{url}/{suffix}`
    pub fn resource_url(&self, suffix: impl std::fmt::Display) -> String {
        format!("{}/{}", self.url, suffix)
    }

    /// Snapshot of the default request configuration
    pub async fn default_config(&self) -> RequestConfig {
        self.default_config.read().await.clone()
    }

    /// Replaces the default request configuration
    pub async fn set_default_config(&self, config: RequestConfig) {
        let mut current = self.default_config.write().await;
        *current = config;
    }

    /// True when the default configuration carries credentials
    ///
    /// That is an `Authorization` or `Cookie` header, or at least one cookie.
    pub async fn is_authenticated(&self) -> bool {
        let config = self.default_config.read().await;
        config.header(AUTHORIZATION.as_str()).is_some()
            || config.header(COOKIE.as_str()).is_some()
            || !config.cookies.is_empty()
    }

    /// Drops the installed auth headers; cached tokens are kept
    pub async fn logout(&self) {
        info!("Clearing auth configuration for {}", self.url);
        self.set_default_config(RequestConfig::new()).await;
    }

    /// Makes a request and parses the body into `T`
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `url` - Absolute URL, or a path relative to the base URL
    /// * `body` - Optional JSON body; `None` fields of request models are omitted
    /// * `config` - Per-call override; `None` uses the default configuration
    ///
    /// # Returns
    /// * `Ok(ResponseEnvelope<T>)` - For every HTTP status
    /// * `Err(AppError::MalformedResponse)` - If a 2xx JSON body does not fit `T`
    /// * `Err(AppError::Network)` - If the transport fails
    pub async fn request<B, T>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
        config: Option<&RequestConfig>,
    ) -> Result<ResponseEnvelope<T>, AppError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let raw = self.dispatch(method, url, body, config).await?;
        into_typed_envelope(raw)
    }

    /// Makes a request without a response shape: JSON if possible, text otherwise
    pub async fn request_raw<B>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
        config: Option<&RequestConfig>,
    ) -> Result<ResponseEnvelope<Value>, AppError>
    where
        B: Serialize + ?Sized + Sync,
    {
        let raw = self.dispatch(method, url, body, config).await?;
        Ok(into_untyped_envelope(raw))
    }

    async fn dispatch<B>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
        config: Option<&RequestConfig>,
    ) -> Result<RawResponse, AppError>
    where
        B: Serialize + ?Sized + Sync,
    {
        let url = self.resolve_url(url);
        let config = match config {
            Some(config) => config.clone(),
            None => self.default_config().await,
        };
        make_http_request(&self.http_client, method, &url, &config, body).await
    }

    fn resolve_url(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else {
            self.config.url_for(url)
        }
    }

    /// Makes a GET request
    pub async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        config: Option<&RequestConfig>,
    ) -> Result<ResponseEnvelope<T>, AppError> {
        self.request(Method::GET, url, None::<&()>, config).await
    }

    /// Makes a GET request without a response shape
    pub async fn get_raw(
        &self,
        url: &str,
        config: Option<&RequestConfig>,
    ) -> Result<ResponseEnvelope<Value>, AppError> {
        self.request_raw(Method::GET, url, None::<&()>, config).await
    }

    /// Makes a POST request
    pub async fn post<B, T>(
        &self,
        url: &str,
        body: &B,
        config: Option<&RequestConfig>,
    ) -> Result<ResponseEnvelope<T>, AppError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        self.request(Method::POST, url, Some(body), config).await
    }

    /// Makes a POST request without a response shape
    pub async fn post_raw<B>(
        &self,
        url: &str,
        body: &B,
        config: Option<&RequestConfig>,
    ) -> Result<ResponseEnvelope<Value>, AppError>
    where
        B: Serialize + ?Sized + Sync,
    {
        self.request_raw(Method::POST, url, Some(body), config).await
    }

    /// Makes a PUT request
    pub async fn put<B, T>(
        &self,
        url: &str,
        body: &B,
        config: Option<&RequestConfig>,
    ) -> Result<ResponseEnvelope<T>, AppError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        self.request(Method::PUT, url, Some(body), config).await
    }

    /// Makes a PATCH request
    pub async fn patch<B, T>(
        &self,
        url: &str,
        body: &B,
        config: Option<&RequestConfig>,
    ) -> Result<ResponseEnvelope<T>, AppError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        self.request(Method::PATCH, url, Some(body), config).await
    }

    /// Makes a DELETE request
    pub async fn delete<T: DeserializeOwned>(
        &self,
        url: &str,
        config: Option<&RequestConfig>,
    ) -> Result<ResponseEnvelope<T>, AppError> {
        self.request(Method::DELETE, url, None::<&()>, config).await
    }

    /// Makes a DELETE request without a response shape
    pub async fn delete_raw(
        &self,
        url: &str,
        config: Option<&RequestConfig>,
    ) -> Result<ResponseEnvelope<Value>, AppError> {
        self.request_raw(Method::DELETE, url, None::<&()>, config).await
    }

    /// Makes a HEAD request
    pub async fn head(
        &self,
        url: &str,
        config: Option<&RequestConfig>,
    ) -> Result<ResponseEnvelope<Value>, AppError> {
        self.request_raw(Method::HEAD, url, None::<&()>, config).await
    }

    /// Makes an OPTIONS request
    pub async fn options(
        &self,
        url: &str,
        config: Option<&RequestConfig>,
    ) -> Result<ResponseEnvelope<Value>, AppError> {
        self.request_raw(Method::OPTIONS, url, None::<&()>, config).await
    }

    /// Authenticates and installs the resulting headers as the default configuration
    ///
    /// For every method but username/password the headers are computed locally
    /// and installed directly. For username/password, a token cached for this
    /// base URL is reused when available; otherwise the credentials are
    /// exchanged at `POST {base}/auth` and the returned token is cached. A cache
    /// write failure is logged and does not fail the call. Either way the
    /// default configuration becomes `Cookie: token=<token>`.
    ///
    /// # Arguments
    /// * `method` - Authentication method
    /// * `credentials` - Explicit credentials; `None` uses the configured username/password
    ///
    /// # Returns
    /// * `Ok(RequestConfig)` - The installed configuration
    /// * `Err(AppError::MissingCredential)` - If an input required by `method` is absent
    /// * `Err(AppError::AuthenticationFailed)` - If the auth endpoint returned no token
    pub async fn authenticate(
        &self,
        method: AuthMethod,
        credentials: Option<AuthCredentials>,
    ) -> Result<RequestConfig, AppError> {
        let credentials = match credentials {
            Some(credentials) => credentials,
            None => self.default_credentials()?,
        };

        let auth_config = Authenticator::authenticate(method, &credentials)?;

        if method != AuthMethod::UsernamePassword {
            self.set_default_config(auth_config.clone()).await;
            info!("Installed {} auth headers for {}", method, self.url);
            return Ok(auth_config);
        }

        let (Some(username), Some(password)) =
            (credentials.username.as_deref(), credentials.password.as_deref())
        else {
            return Err(AppError::MissingCredential(
                "username and password are required".to_string(),
            ));
        };

        let scope = self.base_url();
        if let Some(token) = self
            .token_store
            .get_cached_token(scope, username, password)
            .await
        {
            debug!("Reusing cached token for {} on {}", username, scope);
            return Ok(self.install_token(&token).await);
        }

        let token = self.request_token(username, password).await?;
        if let Err(e) = self
            .token_store
            .store_token(scope, username, password, &token)
            .await
        {
            warn!("Token for {} not cached: {}", username, e);
        }
        info!("✓ Authenticated as {}", username);
        Ok(self.install_token(&token).await)
    }

    fn default_credentials(&self) -> Result<AuthCredentials, AppError> {
        match &self.config.credentials {
            Some(c) => Ok(AuthCredentials::username_password(
                c.username.clone(),
                c.password.clone(),
            )),
            None => Err(AppError::MissingCredential(
                "no credentials given and USERNAME/PASSWORD are not configured".to_string(),
            )),
        }
    }

    async fn install_token(&self, token: &str) -> RequestConfig {
        let config =
            RequestConfig::new().with_header(COOKIE.as_str(), &format!("{TOKEN_COOKIE}={token}"));
        self.set_default_config(config.clone()).await;
        config
    }

    /// Exchanges username/password for a token at `POST {base}/auth`
    async fn request_token(&self, username: &str, password: &str) -> Result<String, AppError> {
        let body = CredentialsModel::new(username, password);
        let auth_url = self.config.url_for(AUTH_PATH);
        let response = self
            .post_raw(&auth_url, &body, Some(&RequestConfig::new()))
            .await?;

        if !response.is_success() {
            error!("Authentication failed with status {}", response.status());
            return Err(AppError::AuthenticationFailed(format!(
                "auth endpoint answered {}",
                response.status()
            )));
        }

        let Some(json) = response.json() else {
            error!("Authentication response is not JSON");
            return Err(AppError::AuthenticationFailed(format!(
                "unexpected auth response: {:?}",
                response.text().unwrap_or_default()
            )));
        };

        if let Ok(auth) = serde_json::from_value::<AuthResponse>(json.clone()) {
            if !auth.token.is_empty() {
                return Ok(auth.token);
            }
        }

        let reason = match serde_json::from_value::<AuthFailure>(json.clone()) {
            Ok(failure) => failure.reason,
            Err(_) => format!("unexpected auth response: {json}"),
        };
        error!("Authentication failed: {}", reason);
        Err(AppError::AuthenticationFailed(reason))
    }
}
