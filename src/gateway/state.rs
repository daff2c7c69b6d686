use std::sync::Arc;

use crate::composite::CompositeService;

/// Shared gateway state. The composite service is stateless, so this is
/// immutable configuration shared across concurrent requests.
#[derive(Clone)]
pub struct AppState {
    pub composite: Arc<CompositeService>,
}

impl AppState {
    pub fn new(composite: Arc<CompositeService>) -> Self {
        Self { composite }
    }
}
