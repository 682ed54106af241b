//! Pixup Storage Library
//!
//! Local filesystem stores for the intake and output directories.
//!
//! # Name format
//!
//! Both directories are flat namespaces keyed by generated unique filenames.
//! Names must not contain path separators, `..`, or a leading `/`; name
//! generation is centralized in the `keys` module so intake and output stay
//! consistent.

pub mod keys;
pub mod local;

// Re-export commonly used types
pub use keys::generate_stored_name;
pub use local::{DirStore, StorageError, StorageResult};
