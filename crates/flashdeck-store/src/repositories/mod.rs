//! Repository implementations.
//!
//! Storage state is confined to this module and never exposed through
//! the port trait signatures.

mod memory_flashcard_repository;

pub use memory_flashcard_repository::MemoryFlashcardRepository;
