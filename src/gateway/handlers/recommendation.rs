//! Recommendation pass-through handlers.

use axum::{
    Json,
    extract::{OriginalUri, Query, State},
    http::StatusCode,
};

use crate::models::Recommendation;

use super::ProductIdQuery;
use super::super::error::{GatewayError, GatewayResult};
use super::super::state::AppState;

/// List recommendations for a product
///
/// GET /recommendation?productId={id}
///
/// Best-effort: backend failures yield an empty list, never an error.
#[utoipa::path(
    get,
    path = "/recommendation",
    params(ProductIdQuery),
    responses(
        (status = 200, description = "Recommendations for the product (may be empty)", body = [Recommendation])
    ),
    tag = "Recommendation"
)]
pub async fn get_recommendations(
    State(state): State<AppState>,
    Query(query): Query<ProductIdQuery>,
) -> Json<Vec<Recommendation>> {
    Json(state.composite.get_recommendations(query.product_id).await)
}

/// Create a recommendation
///
/// POST /recommendation
#[utoipa::path(
    post,
    path = "/recommendation",
    request_body = Recommendation,
    responses(
        (status = 200, description = "Recommendation created", body = Recommendation),
        (status = 404, description = "Referenced product does not exist", body = crate::models::ErrorInfo),
        (status = 422, description = "Backend rejected the recommendation", body = crate::models::ErrorInfo)
    ),
    tag = "Recommendation"
)]
pub async fn create_recommendation(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Json(body): Json<Recommendation>,
) -> GatewayResult<Recommendation> {
    state
        .composite
        .create_recommendation(body)
        .await
        .map(Json)
        .map_err(|e| GatewayError::from_integration(uri.path(), e))
}

/// Delete all recommendations of a product
///
/// DELETE /recommendation?productId={id}
#[utoipa::path(
    delete,
    path = "/recommendation",
    params(ProductIdQuery),
    responses(
        (status = 200, description = "Recommendations deleted (or already gone)"),
        (status = 422, description = "Backend rejected the id", body = crate::models::ErrorInfo)
    ),
    tag = "Recommendation"
)]
pub async fn delete_recommendations(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<ProductIdQuery>,
) -> Result<StatusCode, GatewayError> {
    state
        .composite
        .delete_recommendations(query.product_id)
        .await
        .map(|_| StatusCode::OK)
        .map_err(|e| GatewayError::from_integration(uri.path(), e))
}
