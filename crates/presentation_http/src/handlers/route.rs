//! Route planning handler

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use application::RouteQuery;
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Plan a route and collect rest areas
///
/// POST /route, body `{ "start": string, "end": string }`
#[instrument(skip(state, query), fields(start = %query.start, end = %query.end))]
pub async fn plan_route(
    State(state): State<AppState>,
    Json(query): Json<RouteQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let plan = state.route_service.plan(&query).await?;
    Ok((StatusCode::OK, Json(plan)))
}
