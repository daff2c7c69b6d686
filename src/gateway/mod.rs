//! HTTP gateway: routes, state and the server loop.

pub mod error;
pub mod handlers;
pub mod openapi;
pub mod state;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::GatewayConfig;
use state::AppState;

/// Build the gateway router over the shared state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Aggregate endpoint
        .route(
            "/product-composite/{product_id}",
            get(handlers::get_product_aggregate),
        )
        // Product pass-through
        .route("/product", post(handlers::create_product))
        .route(
            "/product/{product_id}",
            get(handlers::get_product).delete(handlers::delete_product),
        )
        // Recommendation pass-through
        .route(
            "/recommendation",
            get(handlers::get_recommendations)
                .post(handlers::create_recommendation)
                .delete(handlers::delete_recommendations),
        )
        // Review pass-through
        .route(
            "/review",
            get(handlers::get_reviews)
                .post(handlers::create_review)
                .delete(handlers::delete_reviews),
        )
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
}

/// Start the HTTP gateway server.
pub async fn run_server(config: &GatewayConfig, state: AppState) {
    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = match TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("❌ FATAL: Failed to bind to {}: {}", addr, e);
            eprintln!(
                "   Hint: Port {} may already be in use. Check with: lsof -i :{}",
                config.port, config.port
            );
            std::process::exit(1);
        }
    };

    println!("🚀 Composite gateway listening on http://{}", addr);
    println!("📖 API Docs: http://{}/docs", addr);

    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("❌ FATAL: Server error: {}", e);
        std::process::exit(1);
    }
}
