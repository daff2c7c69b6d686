//! Composite service layer: aggregate assembly and caller-facing policy.

pub mod service;
pub mod types;

pub use service::CompositeService;
pub use types::{ProductAggregate, ServiceAddresses};
