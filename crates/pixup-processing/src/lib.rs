//! Pixup Processing Library
//!
//! Upload validation and the upscale pipeline: per-file acceptance checks,
//! the 2x contain-fit resize with fixed-quality JPEG re-encode, and the batch
//! coordinator that runs the pipeline over one request's set of files.

pub mod batch;
pub mod image;
pub mod validator;

// Re-export commonly used types
pub use batch::BatchEnhancer;
pub use image::upscaler::Upscaler;
pub use validator::{UploadValidator, ValidationError};
