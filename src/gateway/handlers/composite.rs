//! Aggregate handler: the fan-out endpoint this service exists for.

use axum::{
    Json,
    extract::{OriginalUri, Path, State},
};

use crate::composite::ProductAggregate;

use super::super::error::{GatewayError, GatewayResult};
use super::super::state::AppState;

/// Get the unified view of one product
///
/// GET /product-composite/{product_id}
///
/// Fans out to the product, recommendation and review backends in
/// parallel. A missing product is a 404; failed list fetches degrade
/// to empty lists inside the response.
#[utoipa::path(
    get,
    path = "/product-composite/{product_id}",
    params(("product_id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Aggregate assembled", body = ProductAggregate),
        (status = 404, description = "No product with this id", body = crate::models::ErrorInfo),
        (status = 422, description = "Backend rejected the id", body = crate::models::ErrorInfo)
    ),
    tag = "Composite"
)]
pub async fn get_product_aggregate(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(product_id): Path<i32>,
) -> GatewayResult<ProductAggregate> {
    state
        .composite
        .get_product_aggregate(product_id)
        .await
        .map(Json)
        .map_err(|e| GatewayError::from_integration(uri.path(), e))
}
