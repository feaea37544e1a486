//! Tag handlers.

use axum::Json;
use axum::extract::State;

use crate::error::HttpError;
use crate::state::AppState;

/// List distinct deck tags in order of first appearance.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<String>>, HttpError> {
    Ok(Json(state.repo.list_tags().await?))
}
