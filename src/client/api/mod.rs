//! HTTP boundary to the fleet management API.
//!
//! [`HttpClient`] performs unauthenticated calls (login). [`ApiClient`] wraps it for every
//! other endpoint: it attaches the session's bearer token to each request and, when the API
//! answers `401`, revokes the session through its [`TokenProvider`] before returning
//! [`ApiError::SessionExpired`]. Resource services borrow an `ApiClient` the same way
//! repositories borrow a database connection.

pub mod auth;
pub mod dashboard;
pub mod user;
pub mod vehicle;

use std::sync::Arc;

use dioxus_logger::tracing;
use reqwest::{Method, RequestBuilder, Response, StatusCode, Url};
use serde::{de::DeserializeOwned, Serialize};

use crate::client::error::api::ApiError;

pub use auth::AuthApi;
pub use dashboard::DashboardService;
pub use user::UserService;
pub use vehicle::VehicleService;

/// Source of the bearer token attached to authenticated requests.
pub trait TokenProvider: Send + Sync {
    /// Current token, `None` when nobody is logged in
    fn token(&self) -> Option<String>;

    /// Called when the API rejected the token; must drop the session
    fn revoke(&self);
}

/// Base URL plus a shared `reqwest` connection pool.
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpClient {
    /// Create a client for the API rooted at `base_url`.
    ///
    /// # Returns
    /// - `Ok(HttpClient)` - Client ready to send requests
    /// - `Err(ApiError::InvalidUrl)` - `base_url` is not an absolute URL
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Same as [`HttpClient::new`] with a preconfigured `reqwest` client.
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
    ) -> Result<Self, ApiError> {
        let base_url = base_url.into();

        Url::parse(&base_url).map_err(|e| ApiError::InvalidUrl {
            url: base_url.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client.request(method, self.url(path))
    }
}

/// Authenticated access to the fleet API.
#[derive(Clone)]
pub struct ApiClient {
    http: HttpClient,
    tokens: Arc<dyn TokenProvider>,
}

impl ApiClient {
    pub fn new(http: HttpClient, tokens: impl TokenProvider + 'static) -> Self {
        Self {
            http,
            tokens: Arc::new(tokens),
        }
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let request = self.http.request(method, path);

        match self.tokens.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send a request and classify its outcome.
    ///
    /// # Returns
    /// - `Ok(Response)` - Any 2xx response
    /// - `Err(ApiError::SessionExpired)` - 401, the session has been revoked
    /// - `Err(ApiError::Validation)` - 400 or 422 with the server's messages
    /// - `Err(ApiError::Status)` - Any other non-success status
    /// - `Err(ApiError::Request)` - The request could not be sent
    async fn send(
        &self,
        method: Method,
        path: &str,
        request: RequestBuilder,
    ) -> Result<Response, ApiError> {
        tracing::debug!(method = %method, path = %path, "Sending API request");

        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!(
                method = %method,
                path = %path,
                "API rejected the session token, logging out"
            );
            self.tokens.revoke();

            return Err(ApiError::SessionExpired);
        }

        let err = ApiError::from_response(response).await;
        tracing::debug!(method = %method, path = %path, status = %status, "{}", err);

        Err(err)
    }

    pub(crate) async fn get<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let request = self.request(Method::GET, path);
        let response = self.send(Method::GET, path, request).await?;

        Ok(response.json::<T>().await?)
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(Method::POST, path).json(body);
        let response = self.send(Method::POST, path, request).await?;

        Ok(response.json::<T>().await?)
    }

    /// POST whose response body is ignored; `body` of `None` sends an empty request.
    pub(crate) async fn post_action<B>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        let mut request = self.request(Method::POST, path);
        if let Some(body) = body {
            request = request.json(body);
        }

        self.send(Method::POST, path, request).await?;

        Ok(())
    }

    pub(crate) async fn put<B>(&self, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        let request = self.request(Method::PUT, path).json(body);
        self.send(Method::PUT, path, request).await?;

        Ok(())
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let request = self.request(Method::DELETE, path);
        self.send(Method::DELETE, path, request).await?;

        Ok(())
    }
}
