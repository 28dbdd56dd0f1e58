//! # imagetools algorithms
//!
//! Transforms and sampling over [`ImageBuffer`](imagetools_core::ImageBuffer).
//!
//! ## Available Algorithm Categories
//!
//! - **convert**: ubyte ↔ float element type conversion
//! - **channels**: greyscale (luminance and alpha), grey → RGB
//! - **sample**: bilinear sub-pixel sampling

pub mod channels;
pub mod convert;
pub mod sample;

mod rebuild;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::channels::{
        convert_alpha_to_greyscale, convert_to_greyscale, convert_to_greyscale_with,
        convert_to_rgb, AlphaToGreyscale, Greyscale, GreyscaleParams, ToRgb,
    };
    pub use crate::convert::{convert_to_float, convert_to_ubyte, ToFloat, ToUbyte};
    pub use crate::sample::{get_image_sub_pixel, sample_bilinear, sub_pixel};
    pub use imagetools_core::prelude::*;
}
