//! Download API integration tests.
//!
//! Run with: `cargo test -p pixup-api --test download_test`

mod helpers;

use axum_test::multipart::{MultipartForm, Part};
use helpers::{fixtures, setup_test_app};

#[tokio::test]
async fn test_download_missing_file_returns_404() {
    let app = setup_test_app().await;

    let response = app
        .server
        .get("/api/download/enhanced-does-not-exist.jpg")
        .await;

    assert_eq!(response.status_code(), 404);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "File not found");
    assert!(body.get("success").is_none());
}

#[tokio::test]
async fn test_download_returns_exact_written_bytes() {
    let app = setup_test_app().await;

    let form = MultipartForm::new().add_part(
        "image",
        Part::bytes(fixtures::png(10, 10))
            .file_name("photo.png".to_string())
            .mime_type("image/png".to_string()),
    );
    let upload = app.server.post("/api/upload-single").multipart(form).await;
    assert_eq!(upload.status_code(), 200);

    let body: serde_json::Value = upload.json();
    let download_url = body["downloadUrl"].as_str().unwrap().to_string();
    let enhanced_name = download_url.trim_start_matches("/api/download/").to_string();

    let response = app.server.get(&download_url).await;
    assert_eq!(response.status_code(), 200);

    // Byte-for-byte what the enhancer wrote.
    let on_disk = std::fs::read(app.enhanced_dir().join(&enhanced_name)).unwrap();
    assert_eq!(response.as_bytes().to_vec(), on_disk);

    let disposition = response
        .headers()
        .get("content-disposition")
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment"));
    assert!(disposition.contains(&enhanced_name));
}

#[tokio::test]
async fn test_download_content_type_follows_extension() {
    let app = setup_test_app().await;

    let form = MultipartForm::new().add_part(
        "image",
        Part::bytes(fixtures::png(8, 8))
            .file_name("pic.png".to_string())
            .mime_type("image/png".to_string()),
    );
    let upload = app.server.post("/api/upload-single").multipart(form).await;
    let body: serde_json::Value = upload.json();
    let download_url = body["downloadUrl"].as_str().unwrap().to_string();

    let response = app.server.get(&download_url).await;
    assert_eq!(response.status_code(), 200);
    assert_eq!(
        response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("image/png")
    );
}

#[tokio::test]
async fn test_download_traversal_name_is_not_found() {
    let app = setup_test_app().await;

    let response = app.server.get("/api/download/..%2F..%2Fetc%2Fpasswd").await;

    assert_eq!(response.status_code(), 404);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "File not found");
}
