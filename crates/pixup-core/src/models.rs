//! Domain models for uploads and enhancement results.
//!
//! All entities are request-scoped; nothing here outlives a single HTTP
//! exchange. The only durable artifacts are the files themselves.

use serde::Serialize;
use std::path::PathBuf;

/// One file received by the HTTP boundary and written to the intake directory.
#[derive(Debug, Clone)]
pub struct StoredUpload {
    /// Client-supplied filename, sanitized.
    pub original_name: String,
    /// Generated unique name the file is stored under.
    pub stored_name: String,
    pub size_bytes: u64,
    /// Declared media type from the multipart part.
    pub content_type: String,
    /// Absolute or workspace-relative path of the intake file.
    pub path: PathBuf,
}

/// Outcome of enhancing one stored upload. Serialized as part of the batch
/// response; field names are part of the public API contract.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedImage {
    pub original_name: String,
    pub original_size: u64,
    pub enhanced_name: String,
    /// URL path of the output file under the static prefix.
    pub enhanced_path: String,
    /// URL path of the attachment download endpoint for the output file.
    pub download_url: String,
}

/// Response body for a batch upload.
#[derive(Debug, Serialize)]
pub struct BatchResponse {
    pub success: bool,
    pub message: String,
    pub results: Vec<EnhancedImage>,
}

/// Response body for a single-file upload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleUploadResponse {
    pub success: bool,
    pub original_name: String,
    pub enhanced_path: String,
    pub download_url: String,
}
