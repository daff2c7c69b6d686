//! Product Composite gateway entry point.
//!
//! ```text
//! ┌────────┐    ┌───────────┐    ┌─────────────────┐    ┌──────────┐
//! │ Caller │───▶│  Gateway  │───▶│   Integration   │───▶│ Backends │
//! │ (HTTP) │    │  (axum)   │    │ (reqwest fanout)│    │ (x3)     │
//! └────────┘    └───────────┘    └─────────────────┘    └──────────┘
//! ```
//!
//! The gateway owns no data: every read is a live backend call and every
//! failure is either translated (404/422), passed through with its original
//! status, or degraded to an empty list for the best-effort facets.

use std::sync::Arc;

use product_composite::composite::CompositeService;
use product_composite::config::AppConfig;
use product_composite::gateway::{self, state::AppState};
use product_composite::integration::CompositeIntegration;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

#[tokio::main]
async fn main() {
    let env = get_env();
    let mut app_config = AppConfig::load(&env);
    if let Some(port) = get_port_override() {
        app_config.gateway.port = port;
    }

    let _log_guard = product_composite::logging::init_logging(&app_config);

    tracing::info!("Starting product-composite gateway in {} mode", env);
    tracing::info!(
        "Backends: product {}:{}, recommendation {}:{}, review {}:{}",
        app_config.product_service.host,
        app_config.product_service.port,
        app_config.recommendation_service.host,
        app_config.recommendation_service.port,
        app_config.review_service.host,
        app_config.review_service.port,
    );

    let integration = match CompositeIntegration::from_config(&app_config) {
        Ok(integration) => Arc::new(integration),
        Err(e) => {
            eprintln!("❌ FATAL: Failed to build downstream clients: {}", e);
            std::process::exit(1);
        }
    };

    let service_address = format!("{}:{}", app_config.gateway.host, app_config.gateway.port);
    let composite = Arc::new(CompositeService::new(
        integration.clone(),
        integration.clone(),
        integration,
        service_address,
    ));

    gateway::run_server(&app_config.gateway, AppState::new(composite)).await;
}
