//! Domain types for decks and cards.
//!
//! These are pure data types with no infrastructure dependencies.

pub mod card;
pub mod deck;

pub use card::{Card, InsertCard};
pub use deck::{Deck, InsertDeck};
