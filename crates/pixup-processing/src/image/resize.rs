use image::{imageops, DynamicImage, GenericImageView, Rgba, RgbaImage};

/// Contain-fit resize operations
///
/// Scales an image to fit within target bounds preserving aspect ratio and
/// pads to the exact target size with a white background. Enlargement beyond
/// the source size is permitted; the output always has the target dimensions.
pub struct ContainFit;

impl ContainFit {
    /// Select appropriate filter type based on resize ratio
    pub fn select_filter(
        orig_width: u32,
        orig_height: u32,
        new_width: u32,
        new_height: u32,
    ) -> imageops::FilterType {
        let width_ratio = orig_width as f32 / new_width as f32;
        let height_ratio = orig_height as f32 / new_height as f32;
        let max_ratio = width_ratio.max(height_ratio);

        if max_ratio > 2.0 {
            imageops::FilterType::Triangle
        } else if max_ratio > 1.5 {
            imageops::FilterType::CatmullRom
        } else {
            imageops::FilterType::Lanczos3
        }
    }

    /// Scaled dimensions that fit within the target while preserving aspect
    /// ratio. Never returns a zero dimension.
    pub fn scaled_dimensions(
        orig_width: u32,
        orig_height: u32,
        target_width: u32,
        target_height: u32,
    ) -> (u32, u32) {
        let scale_width = target_width as f32 / orig_width as f32;
        let scale_height = target_height as f32 / orig_height as f32;
        let scale = scale_width.min(scale_height);

        let scaled_width = ((orig_width as f32 * scale).round() as u32)
            .clamp(1, target_width);
        let scaled_height = ((orig_height as f32 * scale).round() as u32)
            .clamp(1, target_height);

        (scaled_width, scaled_height)
    }

    /// Resize to fit within the target bounds, centered on a white canvas of
    /// exactly the target size.
    pub fn apply(img: &DynamicImage, target_width: u32, target_height: u32) -> DynamicImage {
        let (orig_width, orig_height) = img.dimensions();
        let (scaled_width, scaled_height) =
            Self::scaled_dimensions(orig_width, orig_height, target_width, target_height);

        let filter = Self::select_filter(orig_width, orig_height, scaled_width, scaled_height);
        let resized = img.resize_exact(scaled_width, scaled_height, filter);

        if scaled_width == target_width && scaled_height == target_height {
            return resized;
        }

        let bg_color = Rgba([255u8, 255u8, 255u8, 255u8]);
        let canvas_img = RgbaImage::from_pixel(target_width, target_height, bg_color);
        let mut canvas = DynamicImage::ImageRgba8(canvas_img);

        let x_offset = (target_width - scaled_width) / 2;
        let y_offset = (target_height - scaled_height) / 2;

        imageops::overlay(&mut canvas, &resized, x_offset as i64, y_offset as i64);

        canvas
    }
}
