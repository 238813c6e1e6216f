//! Error types for the fleetdesk client.
//!
//! Each concern of the client owns a domain error (authentication, API boundary, session
//! storage, configuration). They are aggregated into [`Error`] with `#[from]` conversions so
//! services and the session store can propagate any of them with `?`. Every failure is handed
//! back to the caller for display; nothing here retries.

pub mod api;
pub mod auth;
pub mod config;
pub mod storage;

use thiserror::Error;

use crate::client::error::{
    api::ApiError, auth::AuthError, config::ConfigError, storage::StorageError,
};

/// Main error type of the fleetdesk client.
///
/// # Error Categories
/// - Authentication errors (missing or rejected credentials, access denied by role)
/// - API errors (expired session, validation failures, other non-success responses, transport)
/// - Session storage errors (reading or writing the persisted session)
/// - Configuration errors (missing or invalid environment variables)
#[derive(Error, Debug)]
pub enum Error {
    /// Authentication or authorization failure detected by the client.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Failure reported by, or while talking to, the fleet API.
    #[error(transparent)]
    ApiError(#[from] ApiError),
    /// Failure reading or writing the persisted session.
    #[error(transparent)]
    StorageError(#[from] StorageError),
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
}

impl Error {
    /// True when the API rejected the session token and the client has been logged out.
    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::ApiError(ApiError::SessionExpired))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::ApiError(ApiError::Request(err))
    }
}
