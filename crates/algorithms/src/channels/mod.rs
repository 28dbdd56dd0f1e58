//! Channel count reduction and expansion
//!
//! All reducers accept ubyte and float buffers and always produce a
//! buffer of the same element type, width and height:
//! - Alpha to greyscale: 4 channels → alpha channel only
//! - Greyscale: weighted RGB luminance, or mean channel magnitude
//! - RGB: single channel broadcast to 3 channels

mod alpha;
mod greyscale;
mod rgb;

pub use alpha::{convert_alpha_to_greyscale, AlphaToGreyscale};
pub use greyscale::{convert_to_greyscale, convert_to_greyscale_with, Greyscale, GreyscaleParams};
pub use rgb::{convert_to_rgb, ToRgb};
