use std::sync::Arc;

use lego_core::publisher::PublisherRegistry;

/// Shared application state passed to all route handlers.
///
/// The registry is built once and never mutated, so cloning the state per
/// request only bumps the `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<PublisherRegistry>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            registry: Arc::new(PublisherRegistry::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
