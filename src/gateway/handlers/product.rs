//! Product pass-through handlers.

use axum::{
    Json,
    extract::{OriginalUri, Path, State},
    http::StatusCode,
};

use crate::models::Product;

use super::super::error::{GatewayError, GatewayResult};
use super::super::state::AppState;

/// Get a single product
///
/// GET /product/{product_id}
#[utoipa::path(
    get,
    path = "/product/{product_id}",
    params(("product_id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, description = "No product with this id", body = crate::models::ErrorInfo),
        (status = 422, description = "Backend rejected the id", body = crate::models::ErrorInfo)
    ),
    tag = "Product"
)]
pub async fn get_product(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(product_id): Path<i32>,
) -> GatewayResult<Product> {
    state
        .composite
        .get_product(product_id)
        .await
        .map(Json)
        .map_err(|e| GatewayError::from_integration(uri.path(), e))
}

/// Create a product
///
/// POST /product
#[utoipa::path(
    post,
    path = "/product",
    request_body = Product,
    responses(
        (status = 200, description = "Product created", body = Product),
        (status = 422, description = "Backend rejected the product", body = crate::models::ErrorInfo)
    ),
    tag = "Product"
)]
pub async fn create_product(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Json(body): Json<Product>,
) -> GatewayResult<Product> {
    state
        .composite
        .create_product(body)
        .await
        .map(Json)
        .map_err(|e| GatewayError::from_integration(uri.path(), e))
}

/// Delete a product
///
/// DELETE /product/{product_id}
///
/// Idempotent: deleting a product that is already gone is a success.
#[utoipa::path(
    delete,
    path = "/product/{product_id}",
    params(("product_id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product deleted (or already gone)"),
        (status = 422, description = "Backend rejected the id", body = crate::models::ErrorInfo)
    ),
    tag = "Product"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(product_id): Path<i32>,
) -> Result<StatusCode, GatewayError> {
    state
        .composite
        .delete_product(product_id)
        .await
        .map(|_| StatusCode::OK)
        .map_err(|e| GatewayError::from_integration(uri.path(), e))
}
