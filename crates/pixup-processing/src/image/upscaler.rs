//! Upscale entry point: decode, 2x contain-fit resize, JPEG re-encode.

use crate::image::resize::ContainFit;
use bytes::Bytes;
use image::{DynamicImage, ImageReader};
use pixup_core::constants::{
    ENHANCED_PREFIX, FALLBACK_TARGET_EDGE, JPEG_QUALITY, UPSCALE_FACTOR,
};
use std::io::Cursor;

pub struct Upscaler;

impl Upscaler {
    /// Target dimensions for a source image. Doubles known dimensions;
    /// falls back to a fixed square target when they cannot be determined.
    pub fn target_dimensions(source: Option<(u32, u32)>) -> (u32, u32) {
        match source {
            Some((width, height)) if width > 0 && height > 0 => (
                width.saturating_mul(UPSCALE_FACTOR),
                height.saturating_mul(UPSCALE_FACTOR),
            ),
            _ => (FALLBACK_TARGET_EDGE, FALLBACK_TARGET_EDGE),
        }
    }

    /// Output filename for a stored intake name.
    pub fn output_name(stored_name: &str) -> String {
        format!("{}{}", ENHANCED_PREFIX, stored_name)
    }

    /// Upscale one image: decode, resize to 2x the source dimensions with
    /// contain fit, and re-encode as JPEG at the fixed quality regardless of
    /// the input format.
    ///
    /// Dimensions are read from the header before the full decode; if the
    /// header does not yield them, the fixed fallback target is used.
    pub fn enhance(data: &[u8]) -> Result<Bytes, anyhow::Error> {
        let header_dims = ImageReader::new(Cursor::new(data))
            .with_guessed_format()?
            .into_dimensions()
            .ok();

        let (target_width, target_height) = Self::target_dimensions(header_dims);

        let img = ImageReader::new(Cursor::new(data))
            .with_guessed_format()?
            .decode()?;

        let resized = ContainFit::apply(&img, target_width, target_height);

        tracing::debug!(
            target_width,
            target_height,
            input_bytes = data.len(),
            "Upscaled image"
        );

        Self::encode_jpeg(&resized, JPEG_QUALITY)
    }

    /// Encode as baseline-compatible progressive JPEG at the given quality.
    fn encode_jpeg(img: &DynamicImage, quality: u8) -> Result<Bytes, anyhow::Error> {
        let rgb_img = img.to_rgb8();
        let (width, height) = rgb_img.dimensions();

        let mut comp = mozjpeg::Compress::new(mozjpeg::ColorSpace::JCS_RGB);
        comp.set_size(width as usize, height as usize);
        comp.set_quality(quality as f32);
        comp.set_progressive_mode();
        comp.set_optimize_coding(true);

        let mut comp = comp.start_compress(Vec::new())?;
        comp.write_scanlines(&rgb_img)?;
        let jpeg_data = comp.finish()?;

        Ok(Bytes::from(jpeg_data))
    }
}
