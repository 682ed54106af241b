//! Test helpers: build app state and router for integration tests.
//!
//! Run from workspace root: `cargo test -p pixup-api --test uploads_test` or
//! `cargo test -p pixup-api`. Each test gets its own temp workspace with
//! fresh intake and output directories.

#![allow(dead_code)]

pub mod fixtures;

use axum_test::TestServer;
use pixup_api::setup;
use pixup_core::Config;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestApp {
    pub server: TestServer,
    workspace: TempDir,
}

impl TestApp {
    /// Path of the intake directory for this test app.
    pub fn upload_dir(&self) -> PathBuf {
        self.workspace.path().join("uploads")
    }

    /// Path of the output directory for this test app.
    pub fn enhanced_dir(&self) -> PathBuf {
        self.workspace.path().join("enhanced")
    }
}

fn test_config(workspace: &TempDir) -> Config {
    Config {
        server_port: 0,
        environment: "test".to_string(),
        cors_origins: vec!["*".to_string()],
        upload_dir: workspace
            .path()
            .join("uploads")
            .to_string_lossy()
            .into_owned(),
        enhanced_dir: workspace
            .path()
            .join("enhanced")
            .to_string_lossy()
            .into_owned(),
        max_file_size_bytes: 50 * 1024 * 1024,
        max_batch_files: 100,
        max_concurrent_enhancements: 4,
        allowed_extensions: ["jpeg", "jpg", "png", "webp", "bmp", "tiff"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        allowed_content_types: [
            "image/jpeg",
            "image/png",
            "image/webp",
            "image/bmp",
            "image/tiff",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
    }
}

pub async fn setup_test_app() -> TestApp {
    setup_test_app_with(|_| {}).await
}

/// Build a test server with a customized configuration.
pub async fn setup_test_app_with(customize: impl FnOnce(&mut Config)) -> TestApp {
    let workspace = TempDir::new().expect("create temp workspace");
    let mut config = test_config(&workspace);
    customize(&mut config);

    let state = setup::build_state(&config).await.expect("build state");
    let router = setup::routes::build_router(&config, state).expect("build router");

    TestApp {
        server: TestServer::new(router).expect("start test server"),
        workspace,
    }
}

/// Number of regular files in a directory.
pub fn file_count(dir: &std::path::Path) -> usize {
    std::fs::read_dir(dir)
        .map(|entries| entries.filter_map(|e| e.ok()).count())
        .unwrap_or(0)
}
