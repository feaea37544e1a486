//! Core domain types and port definitions for flashdeck.
//!
//! - [`domain`]: `Deck`, `Card` and their insert payloads
//! - [`schema`]: insert-payload rules beyond what the types enforce
//! - [`ports`]: the `FlashcardRepository` trait that storage backends implement
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod schema;

// Re-export commonly used types for convenience
pub use domain::{Card, Deck, InsertCard, InsertDeck};
pub use ports::{FlashcardRepository, RepositoryError};
pub use schema::{SchemaError, validate_deck};
