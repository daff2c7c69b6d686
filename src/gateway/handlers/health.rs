//! Health check handler

use std::time::{SystemTime, UNIX_EPOCH};

use axum::Json;
use utoipa::ToSchema;

/// Health check response data
#[derive(serde::Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "UP")]
    pub status: &'static str,
    /// Server timestamp in milliseconds
    #[schema(example = 1703494800000_u64)]
    pub timestamp_ms: u64,
}

/// Health check endpoint
///
/// The gateway holds no connections and no state, so being able to
/// answer at all means it is healthy. Backend reachability is probed per
/// request, never cached here.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service healthy", body = HealthResponse)
    ),
    tag = "System"
)]
pub async fn health_check() -> Json<HealthResponse> {
    let timestamp_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    Json(HealthResponse {
        status: "UP",
        timestamp_ms,
    })
}
