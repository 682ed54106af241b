//! Stored-name generation for intake files.
//!
//! Names are `{uuid-v4}.{extension}`; the random identifier is the sole
//! collision-avoidance mechanism for concurrent requests, so it must be
//! collision-resistant rather than timestamp-based.

use std::path::Path;
use uuid::Uuid;

/// Generate a unique stored name for an uploaded file, preserving the
/// original extension in lowercase. Files without an extension get a bare
/// identifier.
pub fn generate_stored_name(original_filename: &str) -> String {
    let id = Uuid::new_v4();
    match Path::new(original_filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
    {
        Some(ext) if !ext.is_empty() => format!("{}.{}", id, ext),
        _ => id.to_string(),
    }
}
