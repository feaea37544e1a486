//! HTTP request handlers for the Axum web server.
//!
//! Each submodule contains handlers for a specific API area.
//! Handlers are thin wrappers that validate input and delegate to the
//! `FlashcardRepository` held in `AppState`.

pub mod cards;
pub mod decks;
pub mod tags;

use axum::Json;
use axum::extract::rejection::JsonRejection;

use crate::error::HttpError;

/// Unwrap a JSON body, turning any extractor rejection into a 400.
///
/// Covers malformed JSON, a missing content type, and shape/type
/// mismatches alike. The client only ever sees `message`; the detailed
/// reason goes to the log.
fn json_body<T>(payload: Result<Json<T>, JsonRejection>, message: &str) -> Result<T, HttpError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            tracing::warn!(reason = %rejection.body_text(), "{message}");
            Err(HttpError::BadRequest(message.to_string()))
        }
    }
}
