//! HTTP error response conversion
//!
//! This module provides HTTP-specific error response conversion for AppError.
//!
//! **Preferred handler pattern:** Return `Result<impl IntoResponse, HttpAppError>`.
//! Use `AppError` (or types that implement `Into<AppError>`) for errors and `?`
//! so they become `HttpAppError` and render consistently (status, body, logging).
//!
//! The public failure contract is deliberately coarse: the upload endpoints
//! answer every failure with a 500 and a single opaque error string; only a
//! download miss is reported as a structured 404.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pixup_core::{AppError, LogLevel};
use pixup_processing::ValidationError;
use pixup_storage::StorageError;
use serde::Serialize;

/// Failure body for the upload endpoints.
#[derive(Debug, Serialize)]
pub struct FailureResponse {
    pub success: bool,
    pub error: String,
}

/// Body for a download of a file that does not exist.
#[derive(Debug, Serialize)]
pub struct NotFoundResponse {
    pub error: String,
}

/// Wrapper type for AppError to implement IntoResponse
/// This is necessary because of Rust's orphan rules - we can't implement
/// IntoResponse (external trait) for AppError (external type from pixup-core)
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl From<anyhow::Error> for HttpAppError {
    fn from(err: anyhow::Error) -> Self {
        HttpAppError(AppError::Internal(err.to_string()))
    }
}

// Convert domain errors to HttpAppError (avoids orphan rule: we impl for local HttpAppError)

impl From<StorageError> for HttpAppError {
    fn from(err: StorageError) -> Self {
        let app = match err {
            StorageError::NotFound(msg) => AppError::NotFound(msg),
            StorageError::InvalidName(msg) => AppError::InvalidInput(msg),
            StorageError::WriteFailed(msg) => AppError::Storage(msg),
            StorageError::ReadFailed(msg) => AppError::Storage(msg),
            StorageError::IoError(err) => AppError::Internal(format!("IO error: {}", err)),
            StorageError::ConfigError(msg) => AppError::Internal(msg),
        };
        HttpAppError(app)
    }
}

impl From<ValidationError> for HttpAppError {
    fn from(err: ValidationError) -> Self {
        let app = match err {
            ValidationError::FileTooLarge { size, max } => {
                AppError::PayloadTooLarge(format!("{} bytes exceeds max {} bytes", size, max))
            }
            other => AppError::InvalidInput(other.to_string()),
        };
        HttpAppError(app)
    }
}

fn log_error(error: &AppError) {
    let error_type = error.error_type();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, error_type = error_type, "Error occurred");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, error_type = error_type, "Error occurred");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, error_type = error_type, "Error occurred");
        }
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let app_error = &self.0;

        log_error(app_error);

        match app_error {
            AppError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(NotFoundResponse {
                    error: "File not found".to_string(),
                }),
            )
                .into_response(),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(FailureResponse {
                    success: false,
                    error: app_error.to_string(),
                }),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_storage_error_not_found() {
        let storage_err = StorageError::NotFound("enhanced-x.jpg".to_string());
        let HttpAppError(app_err) = storage_err.into();
        match app_err {
            AppError::NotFound(msg) => assert_eq!(msg, "enhanced-x.jpg"),
            _ => panic!("Expected NotFound variant"),
        }
    }

    #[test]
    fn test_from_storage_error_invalid_name() {
        let storage_err = StorageError::InvalidName("bad name".to_string());
        let HttpAppError(app_err) = storage_err.into();
        match app_err {
            AppError::InvalidInput(msg) => assert_eq!(msg, "bad name"),
            _ => panic!("Expected InvalidInput variant"),
        }
    }

    #[test]
    fn test_from_validation_error_file_too_large() {
        let validation_err = ValidationError::FileTooLarge {
            size: 1000,
            max: 500,
        };
        let HttpAppError(app_err) = validation_err.into();
        match app_err {
            AppError::PayloadTooLarge(msg) => {
                assert!(msg.contains("1000"));
                assert!(msg.contains("500"));
            }
            _ => panic!("Expected PayloadTooLarge variant"),
        }
    }

    #[test]
    fn test_from_validation_error_extension() {
        let validation_err = ValidationError::InvalidExtension {
            extension: "exe".to_string(),
            allowed: vec!["jpg".to_string(), "png".to_string()],
        };
        let HttpAppError(app_err) = validation_err.into();
        match app_err {
            AppError::InvalidInput(msg) => {
                assert!(msg.contains("exe"));
                assert!(msg.contains("jpg"));
            }
            _ => panic!("Expected InvalidInput variant"),
        }
    }

    /// Verifies the public error contract: failure bodies carry `success` and
    /// `error`, not-found bodies carry only `error`.
    #[test]
    fn test_response_body_shapes() {
        let failure = FailureResponse {
            success: false,
            error: "Image processing error: corrupt".to_string(),
        };
        let json = serde_json::to_value(&failure).expect("serialize");
        assert_eq!(json.get("success").and_then(|v| v.as_bool()), Some(false));
        assert!(json.get("error").and_then(|v| v.as_str()).is_some());

        let not_found = NotFoundResponse {
            error: "File not found".to_string(),
        };
        let json = serde_json::to_value(&not_found).expect("serialize");
        assert_eq!(
            json.get("error").and_then(|v| v.as_str()),
            Some("File not found")
        );
        assert!(json.get("success").is_none());
    }
}
