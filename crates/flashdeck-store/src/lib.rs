//! Storage backends for flashdeck.
//!
//! Currently a single in-memory backend: state lives for the lifetime of
//! the process and a restart is a full reset.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod factory;
pub mod repositories;

// Re-export factory for convenient access
pub use factory::StoreFactory;

// Re-export repository implementations
pub use repositories::MemoryFlashcardRepository;
