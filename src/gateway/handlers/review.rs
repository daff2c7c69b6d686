//! Review pass-through handlers.

use axum::{
    Json,
    extract::{OriginalUri, Query, State},
    http::StatusCode,
};

use crate::models::Review;

use super::ProductIdQuery;
use super::super::error::{GatewayError, GatewayResult};
use super::super::state::AppState;

/// List reviews for a product
///
/// GET /review?productId={id}
///
/// Best-effort: backend failures yield an empty list, never an error.
#[utoipa::path(
    get,
    path = "/review",
    params(ProductIdQuery),
    responses(
        (status = 200, description = "Reviews for the product (may be empty)", body = [Review])
    ),
    tag = "Review"
)]
pub async fn get_reviews(
    State(state): State<AppState>,
    Query(query): Query<ProductIdQuery>,
) -> Json<Vec<Review>> {
    Json(state.composite.get_reviews(query.product_id).await)
}

/// Create a review
///
/// POST /review
#[utoipa::path(
    post,
    path = "/review",
    request_body = Review,
    responses(
        (status = 200, description = "Review created", body = Review),
        (status = 404, description = "Referenced product does not exist", body = crate::models::ErrorInfo),
        (status = 422, description = "Backend rejected the review", body = crate::models::ErrorInfo)
    ),
    tag = "Review"
)]
pub async fn create_review(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Json(body): Json<Review>,
) -> GatewayResult<Review> {
    state
        .composite
        .create_review(body)
        .await
        .map(Json)
        .map_err(|e| GatewayError::from_integration(uri.path(), e))
}

/// Delete all reviews of a product
///
/// DELETE /review?productId={id}
#[utoipa::path(
    delete,
    path = "/review",
    params(ProductIdQuery),
    responses(
        (status = 200, description = "Reviews deleted (or already gone)"),
        (status = 422, description = "Backend rejected the id", body = crate::models::ErrorInfo)
    ),
    tag = "Review"
)]
pub async fn delete_reviews(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<ProductIdQuery>,
) -> Result<StatusCode, GatewayError> {
    state
        .composite
        .delete_reviews(query.product_id)
        .await
        .map(|_| StatusCode::OK)
        .map_err(|e| GatewayError::from_integration(uri.path(), e))
}
