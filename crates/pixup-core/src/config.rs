//! Configuration module
//!
//! Environment-driven configuration for the pixup service. Every knob has a
//! working default so the server starts with no environment at all; `PORT`
//! overrides the listen port as the only required piece of deploy wiring.

use std::env;

// Common constants
const SERVER_PORT: u16 = 5000;
const MAX_FILE_SIZE_MB: usize = 50;
const MAX_BATCH_FILES: usize = 100;
const MAX_CONCURRENT_ENHANCEMENTS: usize = 4;
const UPLOAD_DIR: &str = "uploads";
const ENHANCED_DIR: &str = "enhanced";

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub environment: String,
    pub cors_origins: Vec<String>,
    /// Intake directory: as-submitted files.
    pub upload_dir: String,
    /// Output directory: resized and re-encoded files.
    pub enhanced_dir: String,
    /// Per-file size ceiling in bytes.
    pub max_file_size_bytes: usize,
    /// Maximum number of parts accepted in one batch request.
    pub max_batch_files: usize,
    /// Upper bound on per-request parallel enhancement work.
    pub max_concurrent_enhancements: usize,
    pub allowed_extensions: Vec<String>,
    pub allowed_content_types: Vec<String>,
}

impl Config {
    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let cors_origins_str = env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string());
        let cors_origins: Vec<String> = cors_origins_str
            .split(',')
            .map(|s| s.trim().to_string())
            .collect();

        let max_file_size_mb = env::var("MAX_FILE_SIZE_MB")
            .unwrap_or_else(|_| MAX_FILE_SIZE_MB.to_string())
            .parse::<usize>()
            .unwrap_or(MAX_FILE_SIZE_MB);

        let allowed_extensions = env::var("ALLOWED_EXTENSIONS")
            .unwrap_or_else(|_| "jpeg,jpg,png,webp,bmp,tiff".to_string())
            .split(',')
            .map(|s| s.trim().to_lowercase())
            .collect();

        let allowed_content_types = env::var("ALLOWED_CONTENT_TYPES")
            .unwrap_or_else(|_| {
                "image/jpeg,image/png,image/webp,image/bmp,image/tiff".to_string()
            })
            .split(',')
            .map(|s| s.trim().to_lowercase())
            .collect();

        let config = Config {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| SERVER_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            environment,
            cors_origins,
            upload_dir: env::var("UPLOAD_DIR").unwrap_or_else(|_| UPLOAD_DIR.to_string()),
            enhanced_dir: env::var("ENHANCED_DIR").unwrap_or_else(|_| ENHANCED_DIR.to_string()),
            max_file_size_bytes: max_file_size_mb * 1024 * 1024,
            max_batch_files: env::var("MAX_BATCH_FILES")
                .unwrap_or_else(|_| MAX_BATCH_FILES.to_string())
                .parse()
                .unwrap_or(MAX_BATCH_FILES),
            max_concurrent_enhancements: env::var("MAX_CONCURRENT_ENHANCEMENTS")
                .unwrap_or_else(|_| MAX_CONCURRENT_ENHANCEMENTS.to_string())
                .parse()
                .unwrap_or(MAX_CONCURRENT_ENHANCEMENTS),
            allowed_extensions,
            allowed_content_types,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.is_production() && self.cors_origins.iter().any(|o| o == "*") {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        if self.upload_dir.trim().is_empty() || self.enhanced_dir.trim().is_empty() {
            return Err(anyhow::anyhow!(
                "UPLOAD_DIR and ENHANCED_DIR must be non-empty paths"
            ));
        }

        if self.upload_dir == self.enhanced_dir {
            return Err(anyhow::anyhow!(
                "UPLOAD_DIR and ENHANCED_DIR must be distinct directories"
            ));
        }

        if self.max_file_size_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_FILE_SIZE_MB must be at least 1"));
        }

        if self.max_batch_files == 0 {
            return Err(anyhow::anyhow!("MAX_BATCH_FILES must be at least 1"));
        }

        if self.max_concurrent_enhancements == 0 {
            return Err(anyhow::anyhow!(
                "MAX_CONCURRENT_ENHANCEMENTS must be at least 1"
            ));
        }

        if self.allowed_extensions.is_empty() || self.allowed_content_types.is_empty() {
            return Err(anyhow::anyhow!(
                "ALLOWED_EXTENSIONS and ALLOWED_CONTENT_TYPES must not be empty"
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            server_port: 5000,
            environment: "test".to_string(),
            cors_origins: vec!["*".to_string()],
            upload_dir: "uploads".to_string(),
            enhanced_dir: "enhanced".to_string(),
            max_file_size_bytes: 50 * 1024 * 1024,
            max_batch_files: 100,
            max_concurrent_enhancements: 4,
            allowed_extensions: vec!["jpg".to_string(), "png".to_string()],
            allowed_content_types: vec!["image/jpeg".to_string(), "image/png".to_string()],
        }
    }

    #[test]
    fn test_validate_ok() {
        assert!(test_config().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_wildcard_cors_in_production() {
        let mut config = test_config();
        config.environment = "production".to_string();
        assert!(config.validate().is_err());

        config.cors_origins = vec!["https://app.example.com".to_string()];
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_shared_directories() {
        let mut config = test_config();
        config.enhanced_dir = config.upload_dir.clone();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_limits() {
        let mut config = test_config();
        config.max_batch_files = 0;
        assert!(config.validate().is_err());

        let mut config = test_config();
        config.max_concurrent_enhancements = 0;
        assert!(config.validate().is_err());
    }
}
