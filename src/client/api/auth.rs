use async_trait::async_trait;
use dioxus_logger::tracing;
use fleetdesk_model::auth::{LoginRequest, LoginResponse};
use reqwest::{Method, StatusCode};

use crate::client::{
    api::HttpClient,
    error::{api::ApiError, auth::AuthError, Error},
};

pub const LOGIN_PATH: &str = "/Auth/login";

/// Exchanges credentials for a token and identity.
///
/// Implemented by [`HttpClient`]; tests substitute a fake to drive the session store
/// without a server. The API answers bad credentials with `400` or `401`.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// # Returns
    /// - `Ok(LoginResponse)` - Token and identity of the authenticated user
    /// - `Err(Error::AuthError(AuthError::InvalidCredentials))` - Credentials were rejected
    /// - `Err(Error::ApiError(_))` - Any other failure talking to the API
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, Error>;
}

#[async_trait]
impl AuthApi for HttpClient {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, Error> {
        let response = self
            .request(Method::POST, LOGIN_PATH)
            .json(request)
            .send()
            .await?;

        let status = response.status();

        if status.is_success() {
            return Ok(response.json::<LoginResponse>().await?);
        }

        // A rejected login is a form error, not an expired session
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::BAD_REQUEST {
            tracing::debug!(email = %request.email, "Login rejected");

            return Err(AuthError::InvalidCredentials.into());
        }

        Err(ApiError::from_response(response).await.into())
    }
}
