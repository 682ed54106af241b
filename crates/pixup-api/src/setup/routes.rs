//! Route configuration and setup.

use crate::handlers::{download, upload_batch, upload_single};
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use pixup_core::constants::{ENHANCED_URL_PREFIX, UPLOADS_URL_PREFIX};
use pixup_core::Config;
use std::sync::Arc;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Setup all application routes
pub fn build_router(config: &Config, state: Arc<AppState>) -> Result<Router, anyhow::Error> {
    let cors = setup_cors(config)?;

    let http_concurrency_limit = std::env::var("HTTP_CONCURRENCY_LIMIT")
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(10_000)
        .max(1);

    // Transport-level cap: a full batch of maximum-size files plus multipart framing.
    let body_limit = config
        .max_file_size_bytes
        .saturating_mul(config.max_batch_files)
        .saturating_add(1024 * 1024);

    let app = Router::new()
        .route("/api/upload-folder", post(upload_batch::upload_folder))
        .route("/api/upload-single", post(upload_single::upload_single))
        .route("/api/download/{filename}", get(download::download_file))
        .nest_service(UPLOADS_URL_PREFIX, ServeDir::new(state.intake.base_path()))
        .nest_service(ENHANCED_URL_PREFIX, ServeDir::new(state.output.base_path()))
        .layer(ConcurrencyLimitLayer::new(http_concurrency_limit))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(DefaultBodyLimit::disable())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let cors = if config.cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins = config
            .cors_origins
            .iter()
            .map(|o| o.parse::<HeaderValue>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| anyhow::anyhow!("Invalid CORS origin: {}", e))?;

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any)
    };

    Ok(cors)
}
