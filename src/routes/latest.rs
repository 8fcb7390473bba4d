//! Latest-interaction endpoint.

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::error::{ApiError, ApiResult};
use crate::state::{AppState, InteractionRecord};

/// Handle `GET /latest`.
///
/// Read-only: returns the stored input/output pair, or 404 with a
/// descriptive message if nothing has been generated yet.
pub async fn latest(State(state): State<Arc<AppState>>) -> ApiResult<Json<InteractionRecord>> {
    match state.latest() {
        Some(record) => Ok(Json(record)),
        None => Err(ApiError::NotFound("No previous interaction yet.".to_string())),
    }
}
