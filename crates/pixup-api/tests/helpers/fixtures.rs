//! Test fixtures: in-memory encoded images.

#![allow(dead_code)]

use image::{DynamicImage, GenericImageView, ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

/// Encode a solid-color test image in the given format.
pub fn encoded_image(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
    let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
        width,
        height,
        Rgba([180, 40, 90, 255]),
    ));
    let mut buffer = Vec::new();
    img.to_rgb8()
        .write_to(&mut Cursor::new(&mut buffer), format)
        .expect("encode test image");
    buffer
}

pub fn png(width: u32, height: u32) -> Vec<u8> {
    encoded_image(width, height, ImageFormat::Png)
}

pub fn bmp(width: u32, height: u32) -> Vec<u8> {
    encoded_image(width, height, ImageFormat::Bmp)
}

/// Bytes no image decoder accepts.
pub fn corrupt_image() -> Vec<u8> {
    b"this is definitely not an image".to_vec()
}

/// Decode image bytes, returning (dimensions, detected format).
pub fn decode(data: &[u8]) -> ((u32, u32), Option<ImageFormat>) {
    let reader = image::ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .expect("guess format");
    let format = reader.format();
    let img = reader.decode().expect("decode image");
    (img.dimensions(), format)
}
