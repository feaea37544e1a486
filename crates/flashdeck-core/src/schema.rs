//! Insert-schema validation.
//!
//! Shape and type checks happen during deserialization into `InsertDeck` /
//! `InsertCard`. The rules here cover what types alone cannot express.
//! Cards have no such rules: `front` and `back` may be empty and an unknown
//! `deck_id` is accepted.

use crate::domain::InsertDeck;

/// Schema validation error for insert payloads.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("Field `{0}` cannot be empty")]
    EmptyField(&'static str),
}

/// Validate a deck insert payload.
pub fn validate_deck(deck: &InsertDeck) -> Result<(), SchemaError> {
    if deck.name.is_empty() {
        return Err(SchemaError::EmptyField("name"));
    }

    Ok(())
}
