//! Pixup Core Library
//!
//! This crate provides the configuration, error types, domain models, and
//! constants shared across all pixup components.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, LogLevel};
