//! Flat on-disk store rooted at a single directory.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio_util::io::ReaderStream;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Write failed: {0}")]
    WriteFailed(String),

    #[error("Read failed: {0}")]
    ReadFailed(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid file name: {0}")]
    InvalidName(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// One flat directory of files plus the URL prefix it is served under.
///
/// Used for both the intake and the output directory. The directory is
/// created on construction and treated as append-only: files are written
/// once and never mutated or deleted by the store.
#[derive(Clone)]
pub struct DirStore {
    base_path: PathBuf,
    url_prefix: String,
}

impl DirStore {
    /// Create a new DirStore, creating the backing directory if absent.
    ///
    /// # Arguments
    /// * `base_path` - Directory for file storage (e.g. "uploads")
    /// * `url_prefix` - URL path the directory is served under (e.g. "/uploads")
    pub async fn new(
        base_path: impl Into<PathBuf>,
        url_prefix: impl Into<String>,
    ) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create storage directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(DirStore {
            base_path,
            url_prefix: url_prefix.into(),
        })
    }

    /// Root directory of this store.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Public URL path for a stored file.
    pub fn url_for(&self, name: &str) -> String {
        format!("{}/{}", self.url_prefix.trim_end_matches('/'), name)
    }

    /// Convert a file name to a filesystem path with security validation.
    ///
    /// The namespace is flat: names containing path separators or traversal
    /// sequences are rejected so a crafted name cannot escape the directory.
    fn name_to_path(&self, name: &str) -> StorageResult<PathBuf> {
        if name.is_empty()
            || name.contains("..")
            || name.contains('/')
            || name.contains('\\')
        {
            return Err(StorageError::InvalidName(
                "File name contains invalid characters".to_string(),
            ));
        }

        Ok(self.base_path.join(name))
    }

    /// Ensure the backing directory exists
    async fn ensure_dir(&self) -> StorageResult<()> {
        fs::create_dir_all(&self.base_path).await?;
        Ok(())
    }

    /// Write a file under the given name, returning its filesystem path.
    pub async fn write(&self, name: &str, data: &[u8]) -> StorageResult<PathBuf> {
        let path = self.name_to_path(name)?;
        let size = data.len();

        self.ensure_dir().await?;

        let start = std::time::Instant::now();

        let mut file = fs::File::create(&path).await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to create file {}: {}", path.display(), e))
        })?;

        file.write_all(data).await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to write file {}: {}", path.display(), e))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to sync file {}: {}", path.display(), e))
        })?;

        tracing::debug!(
            path = %path.display(),
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "File written"
        );

        Ok(path)
    }

    /// Read an entire file by name.
    pub async fn read(&self, name: &str) -> StorageResult<Vec<u8>> {
        let path = self.name_to_path(name)?;

        if !fs::try_exists(&path).await.unwrap_or(false) {
            return Err(StorageError::NotFound(name.to_string()));
        }

        fs::read(&path).await.map_err(|e| {
            StorageError::ReadFailed(format!("Failed to read file {}: {}", path.display(), e))
        })
    }

    /// Open a file as a chunked byte stream (for large downloads).
    pub async fn read_stream(&self, name: &str) -> StorageResult<ReaderStream<fs::File>> {
        let path = self.name_to_path(name)?;

        if !fs::try_exists(&path).await.unwrap_or(false) {
            return Err(StorageError::NotFound(name.to_string()));
        }

        let file = fs::File::open(&path).await.map_err(|e| {
            StorageError::ReadFailed(format!("Failed to open file {}: {}", path.display(), e))
        })?;

        Ok(ReaderStream::new(file))
    }

    /// Check if a file exists
    pub async fn exists(&self, name: &str) -> StorageResult<bool> {
        let path = self.name_to_path(name)?;
        Ok(fs::try_exists(&path).await.unwrap_or(false))
    }

    /// Get the size in bytes of a stored file, if it exists.
    pub async fn content_length(&self, name: &str) -> StorageResult<u64> {
        let path = self.name_to_path(name)?;
        let meta = fs::metadata(&path).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => StorageError::NotFound(name.to_string()),
            _ => StorageError::ReadFailed(e.to_string()),
        })?;
        Ok(meta.len())
    }
}
