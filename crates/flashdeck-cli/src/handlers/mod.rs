//! Command handlers.

pub mod web;
