//! Sub-pixel sampling
//!
//! Bilinear interpolation at fractional coordinates. Integer coordinates
//! address pixels directly; coordinates are clamped to the image before the
//! 2x2 neighborhood is gathered, so edge pixels repeat instead of wrapping.

mod bilinear;

pub use bilinear::{get_image_sub_pixel, sample_bilinear, sub_pixel};
