//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use console_service::SubnetService;

/// Shared application state, cloned into every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// SUBNET operations.
    pub subnet_service: Arc<SubnetService>,
}
