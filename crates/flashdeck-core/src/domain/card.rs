//! Card domain types.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// A single front/back study unit stored under a deck.
///
/// `deck_id` is recorded as given at creation time. The store does not
/// check that the referenced deck exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: i64,
    pub deck_id: i64,
    pub front: String,
    pub back: String,

    /// Data URI or path reference for an image on the front face.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub front_image: Option<String>,

    /// Data URI or path reference for an image on the back face.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub back_image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl Card {
    /// Combine a store-assigned ID with the client-supplied fields.
    #[must_use]
    pub fn from_insert(id: i64, card: InsertCard) -> Self {
        Self {
            id,
            deck_id: card.deck_id,
            front: card.front,
            back: card.back,
            front_image: card.front_image,
            back_image: card.back_image,
            notes: card.notes,
            tags: card.tags,
        }
    }
}

/// Data accepted from a client when creating a card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertCard {
    /// JSON numbers like `1.0` are accepted; fractional values are not.
    #[serde(deserialize_with = "deserialize_integral")]
    pub deck_id: i64,
    pub front: String,
    pub back: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub front_image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub back_image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl InsertCard {
    /// Create an insert payload with the required fields only.
    pub fn new(deck_id: i64, front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            deck_id,
            front: front.into(),
            back: back.into(),
            ..Self::default()
        }
    }

    /// Attach study notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
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

/// Deserialize an `i64` from any JSON number with no fractional part.
fn deserialize_integral<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    struct IntegralVisitor;

    impl Visitor<'_> for IntegralVisitor {
        type Value = i64;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an integer")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
            i64::try_from(v).map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
        }

        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_precision_loss,
            clippy::float_cmp
        )]
        fn visit_f64<E: de::Error>(self, v: f64) -> Result<i64, E> {
            // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound
            if v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 {
                Ok(v as i64)
            } else {
                Err(E::invalid_value(de::Unexpected::Float(v), &self))
            }
        }
    }

    deserializer.deserialize_i64(IntegralVisitor)
}
