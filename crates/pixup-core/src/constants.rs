//! Fixed pipeline constants.
//!
//! The output naming convention (`enhanced-` + stored name) is load-bearing:
//! it is how intake and output artifacts for one logical upload stay
//! correlatable without a database.

/// Prefix joined to a stored intake name to form the output filename.
pub const ENHANCED_PREFIX: &str = "enhanced-";

/// JPEG quality applied to every re-encoded output (0-100 scale).
pub const JPEG_QUALITY: u8 = 90;

/// Factor applied to known source dimensions when computing the target size.
pub const UPSCALE_FACTOR: u32 = 2;

/// Target edge used when source dimensions cannot be determined up front.
pub const FALLBACK_TARGET_EDGE: u32 = 2000;

/// URL prefix under which the intake directory is served read-only.
pub const UPLOADS_URL_PREFIX: &str = "/uploads";

/// URL prefix under which the output directory is served read-only.
pub const ENHANCED_URL_PREFIX: &str = "/enhanced";

/// URL prefix for attachment downloads of output files.
pub const DOWNLOAD_URL_PREFIX: &str = "/api/download";
