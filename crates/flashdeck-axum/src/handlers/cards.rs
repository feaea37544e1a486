//! Card handlers.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use flashdeck_core::{Card, InsertCard};

use super::json_body;
use crate::error::HttpError;
use crate::state::AppState;

const INVALID_CARD: &str = "Invalid card data";

/// Get a card by ID.
///
/// Returns null for an unknown ID rather than a 404. A non-integer ID is
/// rejected with 400 by the path extractor.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Option<Card>>, HttpError> {
    Ok(Json(state.repo.get_card(id).await?))
}

/// Create a card. The referenced deck does not have to exist.
///
/// Cards have no rules beyond the insert schema, so a body that decodes
/// is stored as is.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<InsertCard>, JsonRejection>,
) -> Result<Json<Card>, HttpError> {
    let card = json_body(payload, INVALID_CARD)?;
    Ok(Json(state.repo.create_card(card).await?))
}

/// Delete a card. Deleting a missing card is a no-op; a non-integer ID is
/// rejected with 400 by the path extractor.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, HttpError> {
    state.repo.delete_card(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
