use std::collections::BTreeMap;

use fleetdesk_model::api::ErrorDto;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// The API answered `401` to an authenticated call; the session has been cleared.
    #[error("Your session has expired, please log in again")]
    SessionExpired,
    /// The API rejected a submitted form.
    #[error("{message}")]
    Validation {
        status: StatusCode,
        message: String,
        errors: BTreeMap<String, Vec<String>>,
    },
    /// Any other non-success response.
    #[error("Request failed with status {status}: {message}")]
    Status { status: StatusCode, message: String },
    #[error("Invalid API URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
    /// The request could not be sent or its response could not be read.
    #[error("Failed to reach the fleet API: {0}")]
    Request(#[from] reqwest::Error),
}

impl ApiError {
    /// Classify a non-success response other than `401`.
    ///
    /// The server's `ErrorDto` is preferred for the message; the raw body text is used when
    /// the body isn't one.
    pub async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        let (message, errors) = match serde_json::from_str::<ErrorDto>(&body) {
            Ok(dto) => (
                dto.summary()
                    .map(str::to_string)
                    .unwrap_or_else(|| default_message(status)),
                dto.errors,
            ),
            Err(_) if !body.trim().is_empty() => (body.trim().to_string(), BTreeMap::new()),
            Err(_) => (default_message(status), BTreeMap::new()),
        };

        if status == StatusCode::BAD_REQUEST || status == StatusCode::UNPROCESSABLE_ENTITY {
            Self::Validation {
                status,
                message,
                errors,
            }
        } else {
            Self::Status { status, message }
        }
    }

    /// Status code of the response behind this error, if there was one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::SessionExpired => Some(StatusCode::UNAUTHORIZED),
            Self::Validation { status, .. } | Self::Status { status, .. } => Some(*status),
            Self::Request(err) => err.status(),
            Self::InvalidUrl { .. } => None,
        }
    }
}

fn default_message(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("Unknown error")
        .to_string()
}
