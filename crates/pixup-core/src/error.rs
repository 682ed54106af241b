//! Error types module
//!
//! This module provides the core error types used throughout the pixup
//! application. All errors are unified under the `AppError` enum which can
//! represent storage, validation, and image-processing failures.

use std::io;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues like resource limits
    Warn,
    /// Error level - for unexpected failures
    Error,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Image processing error: {0}")]
    ImageProcessing(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("File too large: {0}")]
    PayloadTooLarge(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Internal(format!("IO error: {}", err))
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl AppError {
    /// Get the error type name for log context
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::Storage(_) => "Storage",
            AppError::ImageProcessing(_) => "ImageProcessing",
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::NotFound(_) => "NotFound",
            AppError::PayloadTooLarge(_) => "PayloadTooLarge",
            AppError::Internal(_) => "Internal",
        }
    }

    /// HTTP status code for this error.
    ///
    /// The upload endpoints report every failure as 500 with a single opaque
    /// error string; only a download miss is distinguished as 404.
    pub fn http_status_code(&self) -> u16 {
        match self {
            AppError::NotFound(_) => 404,
            _ => 500,
        }
    }

    /// Log level for this error
    pub fn log_level(&self) -> LogLevel {
        match self {
            AppError::InvalidInput(_) | AppError::NotFound(_) | AppError::PayloadTooLarge(_) => {
                LogLevel::Debug
            }
            AppError::ImageProcessing(_) => LogLevel::Warn,
            AppError::Storage(_) | AppError::Internal(_) => LogLevel::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let err = AppError::NotFound("File not found".to_string());
        assert_eq!(err.http_status_code(), 404);
        assert_eq!(err.error_type(), "NotFound");
        assert_eq!(err.log_level(), LogLevel::Debug);
    }

    #[test]
    fn test_processing_and_storage_map_to_500() {
        let err = AppError::ImageProcessing("corrupt image".to_string());
        assert_eq!(err.http_status_code(), 500);
        assert_eq!(err.log_level(), LogLevel::Warn);

        let err = AppError::Storage("disk full".to_string());
        assert_eq!(err.http_status_code(), 500);
        assert_eq!(err.log_level(), LogLevel::Error);
    }

    #[test]
    fn test_validation_failures_map_to_500() {
        // The upload endpoints collapse validation failures into the same
        // opaque failure body as processing errors.
        let err = AppError::InvalidInput("bad extension".to_string());
        assert_eq!(err.http_status_code(), 500);

        let err = AppError::PayloadTooLarge("52428801 bytes".to_string());
        assert_eq!(err.http_status_code(), 500);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err = AppError::from(io_err);
        match err {
            AppError::Internal(msg) => assert!(msg.contains("IO error")),
            _ => panic!("Expected Internal variant"),
        }
    }
}
