//! Pixup API Library
//!
//! This crate provides the HTTP handlers, error mapping, and application
//! setup for the pixup service.

// Module declarations
mod handlers;
mod utils;

// Public modules
pub mod error;
pub mod setup;
pub mod state;
pub mod telemetry;

// Re-exports
pub use error::HttpAppError;
