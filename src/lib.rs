//! Product Composite — aggregation gateway for three backend microservices.
//!
//! A stateless fan-out/fan-in proxy: one inbound request for a product fans
//! out to the product, recommendation and review backends over HTTP, and the
//! results are assembled into a unified response. Backend failures are
//! translated into a small domain error taxonomy; list retrieval degrades to
//! empty instead of failing.
//!
//! # Modules
//!
//! - [`models`] - Product, Recommendation, Review and ErrorInfo wire records
//! - [`integration`] - downstream REST clients, backend contracts, error translation
//! - [`composite`] - aggregate assembly and caller-facing delete/fan-out policy
//! - [`gateway`] - axum HTTP surface (routes, error mapping, OpenAPI docs)
//! - [`config`] - YAML environment configuration
//! - [`logging`] - tracing setup with rolling file output

pub mod config;
pub mod logging;
pub mod models;

pub mod composite;
pub mod gateway;
pub mod integration;

// Convenient re-exports at crate root
pub use composite::{CompositeService, ProductAggregate, ServiceAddresses};
pub use integration::{
    CompositeIntegration, IntegrationError, ProductService, RecommendationService, ReviewService,
};
pub use models::{ErrorInfo, Product, Recommendation, Review};
