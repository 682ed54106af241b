//! Common utilities for file upload handlers

use axum::extract::multipart::Field;
use axum::extract::Multipart;
use pixup_core::models::StoredUpload;
use pixup_core::AppError;
use pixup_processing::UploadValidator;
use pixup_storage::{generate_stored_name, DirStore};

use crate::error::HttpAppError;

/// Sanitize filename to prevent path traversal and invalid characters.
/// Returns an error if the filename contains path traversal attempts.
pub fn sanitize_filename(filename: &str) -> Result<String, AppError> {
    const MAX_FILENAME_LENGTH: usize = 255;

    let path = std::path::Path::new(filename);
    let filename_only = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(filename);

    if filename_only.contains("..") {
        return Err(AppError::InvalidInput(
            "Filename contains invalid path traversal".to_string(),
        ));
    }

    let sanitized: String = filename_only
        .chars()
        .take(MAX_FILENAME_LENGTH)
        .map(|c| {
            if c.is_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if sanitized.trim().is_empty() || sanitized.len() < 3 {
        return Ok("file".to_string());
    }

    Ok(sanitized)
}

/// Validate one multipart part and persist it into the intake directory.
async fn receive_field(
    field: Field<'_>,
    validator: &UploadValidator,
    intake: &DirStore,
) -> Result<StoredUpload, HttpAppError> {
    let original_name = field
        .file_name()
        .map(|s| s.to_string())
        .unwrap_or_else(|| "unknown".to_string());
    let content_type = field
        .content_type()
        .map(|s| s.to_string())
        .unwrap_or_else(|| "application/octet-stream".to_string());

    let data = field
        .bytes()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Failed to read file data: {}", e)))?;

    validator.validate_all(&original_name, &content_type, data.len())?;

    let safe_original = sanitize_filename(&original_name)?;
    let stored_name = generate_stored_name(&safe_original);
    let path = intake.write(&stored_name, &data).await?;

    tracing::debug!(
        original_name = %safe_original,
        stored_name = %stored_name,
        size_bytes = data.len(),
        "Stored intake file"
    );

    Ok(StoredUpload {
        original_name: safe_original,
        stored_name,
        size_bytes: data.len() as u64,
        content_type,
        path,
    })
}

/// Extract, validate, and store every part named `field_name`, in submission
/// order. Rejection of any single part aborts the whole request; nothing is
/// skipped per-file.
pub async fn receive_uploads(
    mut multipart: Multipart,
    field_name: &str,
    max_files: usize,
    validator: &UploadValidator,
    intake: &DirStore,
) -> Result<Vec<StoredUpload>, HttpAppError> {
    let mut uploads = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Failed to read multipart: {}", e)))?
    {
        if field.name() != Some(field_name) {
            continue;
        }

        if uploads.len() >= max_files {
            return Err(AppError::InvalidInput(format!(
                "Too many files; at most {} per batch",
                max_files
            ))
            .into());
        }

        uploads.push(receive_field(field, validator, intake).await?);
    }

    if uploads.is_empty() {
        return Err(AppError::InvalidInput("No file provided".to_string()).into());
    }

    Ok(uploads)
}

/// Extract exactly one file from the field named `field_name`; multiple file
/// fields are rejected.
pub async fn receive_single(
    mut multipart: Multipart,
    field_name: &str,
    validator: &UploadValidator,
    intake: &DirStore,
) -> Result<StoredUpload, HttpAppError> {
    let mut upload: Option<StoredUpload> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Failed to read multipart: {}", e)))?
    {
        if field.name() != Some(field_name) {
            continue;
        }

        if upload.is_some() {
            return Err(AppError::InvalidInput(format!(
                "Multiple file fields are not allowed; send exactly one field named '{}'",
                field_name
            ))
            .into());
        }

        upload = Some(receive_field(field, validator, intake).await?);
    }

    upload.ok_or_else(|| AppError::InvalidInput("No file provided".to_string()).into())
}
