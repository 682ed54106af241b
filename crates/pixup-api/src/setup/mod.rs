//! Application setup and initialization
//!
//! This module contains all application initialization logic extracted from
//! main.rs for better organization and testability.

pub mod routes;
pub mod server;

use crate::state::AppState;
use anyhow::{Context, Result};
use pixup_core::constants::{ENHANCED_URL_PREFIX, UPLOADS_URL_PREFIX};
use pixup_core::Config;
use pixup_processing::{BatchEnhancer, UploadValidator};
use pixup_storage::DirStore;
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Validate configuration first - fail fast on misconfiguration
    config.validate().context("Configuration validation failed")?;

    // Initialize telemetry first
    crate::telemetry::init_telemetry();

    tracing::info!("Configuration loaded and validated successfully");

    // Build state (creates the intake and output directories on demand)
    let state = build_state(&config).await?;

    // Setup routes
    let router = routes::build_router(&config, state.clone())?;

    Ok((state, router))
}

/// Build application state: directory stores, validator, and enhancer.
pub async fn build_state(config: &Config) -> Result<Arc<AppState>> {
    let intake = DirStore::new(&config.upload_dir, UPLOADS_URL_PREFIX)
        .await
        .context("Failed to initialize intake directory")?;
    let output = DirStore::new(&config.enhanced_dir, ENHANCED_URL_PREFIX)
        .await
        .context("Failed to initialize output directory")?;

    let validator = UploadValidator::new(
        config.max_file_size_bytes,
        config.allowed_extensions.clone(),
        config.allowed_content_types.clone(),
    );
    let enhancer = BatchEnhancer::new(
        intake.clone(),
        output.clone(),
        config.max_concurrent_enhancements,
    );

    Ok(Arc::new(AppState {
        config: config.clone(),
        intake,
        output,
        validator,
        enhancer,
    }))
}
