//! Attachment download endpoint for enhanced files.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::Response,
};
use pixup_core::AppError;
use pixup_storage::StorageError;

use crate::error::HttpAppError;
use crate::state::AppState;

/// Handle `GET /api/download/{filename}`.
///
/// Streams the named file from the output directory as an attachment.
/// Unknown names answer 404; so do names that fail validation, since a
/// crafted name can never refer to an output file.
#[tracing::instrument(skip(state), fields(operation = "download"))]
pub async fn download_file(
    Path(filename): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, HttpAppError> {
    let stream = state
        .output
        .read_stream(&filename)
        .await
        .map_err(|e| match e {
            StorageError::NotFound(_) | StorageError::InvalidName(_) => {
                AppError::NotFound(filename.clone())
            }
            other => AppError::Storage(other.to_string()),
        })?;

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type_for(&filename))
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        )
        .body(Body::from_stream(stream))
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(response)
}

/// Content type inferred from the filename extension.
///
/// Output files carry the stored input name, so the extension reflects the
/// submitted file even though the bytes are always the fixed target format.
fn content_type_for(filename: &str) -> &'static str {
    let extension = std::path::Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    match extension.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("tif") | Some("tiff") => "image/tiff",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_for_known_extensions() {
        assert_eq!(content_type_for("enhanced-a.jpg"), "image/jpeg");
        assert_eq!(content_type_for("enhanced-a.PNG"), "image/png");
        assert_eq!(content_type_for("enhanced-a.tiff"), "image/tiff");
    }

    #[test]
    fn test_content_type_for_unknown_extension() {
        assert_eq!(content_type_for("enhanced-a"), "application/octet-stream");
        assert_eq!(content_type_for("enhanced-a.zip"), "application/octet-stream");
    }
}
