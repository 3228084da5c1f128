use crate::error::AppError;
use crate::model::envelope::ResponseEnvelope;
use crate::model::requests::CredentialsModel;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the auth service
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Posts credentials to the auth endpoint
    ///
    /// The envelope is untyped: the body is `{"token": ...}` on success and
    /// `{"reason": ...}` for rejected credentials, both with status 200.
    async fn sign_in(
        &self,
        credentials: &CredentialsModel,
    ) -> Result<ResponseEnvelope<Value>, AppError>;
}
