//! Batch upload endpoint

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use pixup_core::models::BatchResponse;

use crate::error::HttpAppError;
use crate::state::AppState;
use crate::utils::upload::receive_uploads;

/// Handle `POST /api/upload-folder`.
///
/// Decodes every `images` part, validates and stores each into the intake
/// directory, enhances them as one batch, and reports one result per file in
/// submission order.
///
/// The batch is all-or-nothing: a validation or processing failure on any
/// file aborts the request and no results are returned, including for files
/// already enhanced.
#[tracing::instrument(skip(state, multipart), fields(operation = "upload_folder"))]
pub async fn upload_folder(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<BatchResponse>, HttpAppError> {
    let uploads = receive_uploads(
        multipart,
        "images",
        state.config.max_batch_files,
        &state.validator,
        &state.intake,
    )
    .await?;

    tracing::info!(file_count = uploads.len(), "Received batch upload");

    let results = state.enhancer.enhance_all(&uploads).await?;

    let message = format!("{} images processed successfully", results.len());

    Ok(Json(BatchResponse {
        success: true,
        message,
        results,
    }))
}
