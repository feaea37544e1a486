//! Composition utilities for building repositories.
//!
//! Focused purely on construction; no domain logic lives here.

use std::sync::Arc;

use flashdeck_core::ports::FlashcardRepository;

use crate::repositories::MemoryFlashcardRepository;

/// Factory for creating repository instances.
pub struct StoreFactory;

impl StoreFactory {
    /// Build the in-memory flashcard repository as a trait object.
    ///
    /// Call once per process and share the returned handle; each call
    /// yields an independent, empty store.
    pub fn build_repository() -> Arc<dyn FlashcardRepository> {
        Arc::new(MemoryFlashcardRepository::new())
    }
}
