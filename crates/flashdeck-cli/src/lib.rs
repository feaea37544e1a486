//! CLI interface for flashdeck.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by main.rs binary
use dotenvy as _;
use tokio as _;

pub mod commands;
pub mod handlers;
pub mod logging;
pub mod parser;

// Re-export primary types for convenient access
pub use commands::{Commands, WebArgs};
pub use parser::Cli;
