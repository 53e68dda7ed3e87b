//! Rest-area info handler

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use application::InfoQuery;
use serde::Serialize;
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Info response body
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    /// Generated description, relayed verbatim
    pub info: String,
}

/// Describe a rest area by name
///
/// POST /get_info, body `{ "name": string }`
#[instrument(skip(state, query), fields(name = %query.name))]
pub async fn get_rest_area_info(
    State(state): State<AppState>,
    Json(query): Json<InfoQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let info = state.info_service.describe(&query.name).await?;
    Ok((StatusCode::OK, Json(InfoResponse { info })))
}
