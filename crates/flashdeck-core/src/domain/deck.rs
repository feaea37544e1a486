//! Deck domain types.
//!
//! These types are shared between the Rust backend and the web frontend,
//! so field names serialize in camelCase.

use serde::{Deserialize, Serialize};

/// A deck that exists in the store with an assigned ID.
///
/// Use `InsertDeck` for decks that haven't been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deck {
    /// Store-assigned ID, immutable once assigned.
    pub id: i64,

    /// Display name (never empty).
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Free-form tags. Duplicates are kept as given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl Deck {
    /// Combine a store-assigned ID with the client-supplied fields.
    #[must_use]
    pub fn from_insert(id: i64, deck: InsertDeck) -> Self {
        Self {
            id,
            name: deck.name,
            description: deck.description,
            tags: deck.tags,
        }
    }
}

/// Data accepted from a client when creating a deck.
///
/// Any `id` in the request body is ignored; the store assigns one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertDeck {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl InsertDeck {
    /// Create an insert payload with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            tags: None,
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the tag list.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }
}
