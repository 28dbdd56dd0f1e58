//! Image buffer data structures

mod buffer;
mod data;
mod element;

pub use buffer::{is_image_valid, ImageBuffer};
pub use data::ImageData;
pub use element::{ElementType, PixelElement};
