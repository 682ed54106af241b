//! Batch coordinator: runs the upscale pipeline over one request's files.
//!
//! Per-file work is independent, so files are processed with bounded
//! concurrency while results keep input order. The batch is all-or-nothing:
//! the first failure aborts it and no results are returned for any file,
//! including files already enhanced. Outputs written before the failure are
//! left in place.

use crate::image::upscaler::Upscaler;
use futures::{StreamExt, TryStreamExt};
use pixup_core::constants::DOWNLOAD_URL_PREFIX;
use pixup_core::models::{EnhancedImage, StoredUpload};
use pixup_core::AppError;
use pixup_storage::DirStore;

/// Enhances stored uploads from the intake directory into the output
/// directory.
#[derive(Clone)]
pub struct BatchEnhancer {
    intake: DirStore,
    output: DirStore,
    max_concurrent: usize,
}

impl BatchEnhancer {
    pub fn new(intake: DirStore, output: DirStore, max_concurrent: usize) -> Self {
        Self {
            intake,
            output,
            max_concurrent: max_concurrent.max(1),
        }
    }

    /// Enhance every upload, returning one result per input in input order.
    ///
    /// Returns the full result sequence only if every file succeeds.
    pub async fn enhance_all(
        &self,
        uploads: &[StoredUpload],
    ) -> Result<Vec<EnhancedImage>, AppError> {
        let results = futures::stream::iter(uploads.to_vec())
            .map(|upload| self.enhance_one(upload))
            .buffered(self.max_concurrent)
            .try_collect::<Vec<_>>()
            .await?;

        tracing::info!(file_count = results.len(), "Batch enhancement complete");

        Ok(results)
    }

    /// Enhance a single stored upload and write the output file.
    #[tracing::instrument(skip(self, upload), fields(stored_name = %upload.stored_name))]
    pub async fn enhance_one(&self, upload: StoredUpload) -> Result<EnhancedImage, AppError> {
        let data = self
            .intake
            .read(&upload.stored_name)
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?;

        let output_name = Upscaler::output_name(&upload.stored_name);

        // Decode and re-encode are CPU-bound; keep them off the async workers.
        let enhanced = tokio::task::spawn_blocking(move || Upscaler::enhance(&data))
            .await
            .map_err(|e| AppError::Internal(format!("Enhancement task failed: {}", e)))?
            .map_err(|e| AppError::ImageProcessing(e.to_string()))?;

        self.output
            .write(&output_name, &enhanced)
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?;

        tracing::debug!(
            output_name = %output_name,
            output_bytes = enhanced.len(),
            "Enhanced image written"
        );

        Ok(EnhancedImage {
            original_name: upload.original_name,
            original_size: upload.size_bytes,
            enhanced_name: output_name.clone(),
            enhanced_path: self.output.url_for(&output_name),
            download_url: format!("{}/{}", DOWNLOAD_URL_PREFIX, output_name),
        })
    }
}
