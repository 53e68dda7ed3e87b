//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/route", post(handlers::route::plan_route))
        .route("/get_info", post(handlers::info::get_rest_area_info))
        .with_state(state)
}
