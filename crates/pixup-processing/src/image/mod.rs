//! Image operations: contain-fit resizing and the upscale entry point.

pub mod resize;
pub mod upscaler;

pub use resize::ContainFit;
pub use upscaler::Upscaler;
