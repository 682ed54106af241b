//! Single upload endpoint

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use pixup_core::models::SingleUploadResponse;

use crate::error::HttpAppError;
use crate::state::AppState;
use crate::utils::upload::receive_single;

/// Handle `POST /api/upload-single`.
///
/// Accepts exactly one `image` part and runs the same validate-store-enhance
/// pipeline as the batch endpoint for a single file.
#[tracing::instrument(skip(state, multipart), fields(operation = "upload_single"))]
pub async fn upload_single(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<SingleUploadResponse>, HttpAppError> {
    let upload = receive_single(multipart, "image", &state.validator, &state.intake).await?;

    let result = state.enhancer.enhance_one(upload).await?;

    Ok(Json(SingleUploadResponse {
        success: true,
        original_name: result.original_name,
        enhanced_path: result.enhanced_path,
        download_url: result.download_url,
    }))
}
