//! Deck handlers.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use flashdeck_core::{Card, Deck, InsertDeck, validate_deck};

use super::json_body;
use crate::error::HttpError;
use crate::state::AppState;

const INVALID_DECK: &str = "Invalid deck data";

/// List all decks.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Deck>>, HttpError> {
    Ok(Json(state.repo.list_decks().await?))
}

/// Get a deck by ID.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Deck>, HttpError> {
    state
        .repo
        .get_deck(id)
        .await?
        .map(Json)
        .ok_or_else(|| HttpError::NotFound("Deck not found".to_string()))
}

/// Create a deck.
///
/// The body is checked against the insert schema before the repository
/// is touched; a rejected body creates nothing.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<InsertDeck>, JsonRejection>,
) -> Result<Json<Deck>, HttpError> {
    let deck = json_body(payload, INVALID_DECK)?;
    if let Err(e) = validate_deck(&deck) {
        tracing::warn!(reason = %e, "{INVALID_DECK}");
        return Err(HttpError::BadRequest(INVALID_DECK.to_string()));
    }

    Ok(Json(state.repo.create_deck(deck).await?))
}

/// Delete a deck and its cards. Deleting a missing deck is a no-op.
///
/// A non-integer ID never reaches the store: `Path<i64>` rejects it with 400.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, HttpError> {
    state.repo.delete_deck(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List the cards of a deck. Unknown decks yield an empty list; a non-integer
/// ID is rejected with 400 by the path extractor.
pub async fn cards(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Card>>, HttpError> {
    Ok(Json(state.repo.cards_by_deck(id).await?))
}
