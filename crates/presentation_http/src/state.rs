//! Application state shared across handlers

use std::sync::Arc;

use application::{InfoService, RouteService};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Route-flow orchestration
    pub route_service: Arc<RouteService>,
    /// Info-flow orchestration
    pub info_service: Arc<InfoService>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
