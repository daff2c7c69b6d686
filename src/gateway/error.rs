//! Error-to-response mapping for the gateway.
//!
//! Errors leave this service in the same wire shape the backends use
//! (`ErrorInfo`): callers see one error format whether a failure happened
//! here or one hop further down.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::integration::IntegrationError;
use crate::models::ErrorInfo;

/// A failed request, ready to be rendered as an HTTP response.
#[derive(Debug)]
pub struct GatewayError {
    pub status: StatusCode,
    pub path: String,
    pub message: String,
}

impl GatewayError {
    /// Map a domain error onto an HTTP status.
    ///
    /// NotFound and InvalidInput are the two normalized kinds (404/422).
    /// An unexpected backend status is surfaced unchanged; a transport
    /// failure never produced a status and becomes a 500.
    pub fn from_integration(path: &str, err: IntegrationError) -> Self {
        let status = match &err {
            IntegrationError::NotFound(_) => StatusCode::NOT_FOUND,
            IntegrationError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
            IntegrationError::UnexpectedStatus { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            IntegrationError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        Self {
            status,
            path: path.to_string(),
            message: err.message().to_string(),
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let body = ErrorInfo::new(self.path, self.status.as_u16(), self.message);
        (self.status, Json(body)).into_response()
    }
}

/// Handler result: JSON body or an `ErrorInfo`-shaped error response.
pub type GatewayResult<T> = Result<Json<T>, GatewayError>;
