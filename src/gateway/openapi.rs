//! OpenAPI / Swagger UI documentation.
//!
//! - Swagger UI: `http://localhost:7000/docs`
//! - OpenAPI JSON: `http://localhost:7000/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::composite::{ProductAggregate, ServiceAddresses};
use crate::gateway::handlers::HealthResponse;
use crate::models::{ErrorInfo, Product, Recommendation, Review};

/// Main API documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Product Composite API",
        version = "1.0.0",
        description = "Aggregation gateway in front of the product, recommendation and review microservices.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:7000", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health_check,
        crate::gateway::handlers::get_product_aggregate,
        crate::gateway::handlers::get_product,
        crate::gateway::handlers::create_product,
        crate::gateway::handlers::delete_product,
        crate::gateway::handlers::get_recommendations,
        crate::gateway::handlers::create_recommendation,
        crate::gateway::handlers::delete_recommendations,
        crate::gateway::handlers::get_reviews,
        crate::gateway::handlers::create_review,
        crate::gateway::handlers::delete_reviews,
    ),
    components(
        schemas(
            HealthResponse,
            Product,
            Recommendation,
            Review,
            ErrorInfo,
            ProductAggregate,
            ServiceAddresses,
        )
    ),
    tags(
        (name = "Composite", description = "Aggregate endpoints"),
        (name = "Product", description = "Product pass-through"),
        (name = "Recommendation", description = "Recommendation pass-through"),
        (name = "Review", description = "Review pass-through"),
        (name = "System", description = "Health and diagnostics"),
    )
)]
pub struct ApiDoc;
