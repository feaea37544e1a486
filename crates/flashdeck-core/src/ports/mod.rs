//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.

pub mod flashcard_repository;

use thiserror::Error;

pub use flashcard_repository::FlashcardRepository;

/// Domain-specific errors for repository operations.
///
/// A missing entity is not an error at this layer; see
/// [`FlashcardRepository`]. These variants cover backend faults only.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Storage backend error (database, filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),
}
