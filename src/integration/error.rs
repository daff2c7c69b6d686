//! Error taxonomy of the integration layer and the backend error translator.
//!
//! Only two backend semantics are normalized: 404 (not found) and 422
//! (failed validation). Every other status is a bug signal and is carried
//! upward with its original status code and raw body instead of being
//! reshaped.

use reqwest::StatusCode;
use thiserror::Error;
use tracing::warn;

use crate::models::ErrorInfo;

#[derive(Debug, Error)]
pub enum IntegrationError {
    /// Backend answered 404: the resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Backend answered 422: the request failed backend validation.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Backend answered with a status this layer does not normalize.
    /// The original status code and extracted message are preserved.
    #[error("unexpected backend status {status}: {message}")]
    UnexpectedStatus { status: u16, message: String },

    /// The request never produced an HTTP response (connection refused,
    /// timeout, malformed success body, ...).
    #[error("transport failure: {0}")]
    Transport(String),
}

impl IntegrationError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// The message carried by this error.
    pub fn message(&self) -> &str {
        match self {
            Self::NotFound(msg) | Self::InvalidInput(msg) | Self::Transport(msg) => msg,
            Self::UnexpectedStatus { message, .. } => message,
        }
    }
}

pub(crate) fn transport(err: reqwest::Error) -> IntegrationError {
    IntegrationError::Transport(err.to_string())
}

/// Translate a non-2xx backend response into a domain error.
///
/// The body is parsed as [`ErrorInfo`] to extract `message`; if that fails
/// the raw body text is used, and the status line when the body is empty.
pub(crate) fn translate_status(status: StatusCode, body: &str) -> IntegrationError {
    let message = match serde_json::from_str::<ErrorInfo>(body) {
        Ok(info) => info.message,
        Err(_) if !body.is_empty() => body.to_string(),
        Err(_) => status.to_string(),
    };

    match status {
        StatusCode::NOT_FOUND => IntegrationError::NotFound(message),
        StatusCode::UNPROCESSABLE_ENTITY => IntegrationError::InvalidInput(message),
        _ => {
            warn!(
                status = status.as_u16(),
                body, "unexpected HTTP error from backend, passing it through"
            );
            IntegrationError::UnexpectedStatus {
                status: status.as_u16(),
                message,
            }
        }
    }
}
