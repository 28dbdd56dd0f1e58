//! Error types for imagetools

use crate::raster::ElementType;
use thiserror::Error;

/// Main error type for image buffer operations
///
/// Every operation that returns one of these leaves the buffer it was
/// given exactly as it found it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid image buffer: no elements")]
    InvalidBuffer,

    #[error("Wrong source element type: expected {expected}, got {actual}")]
    WrongSourceType {
        expected: ElementType,
        actual: ElementType,
    },

    #[error("Unsupported element type: {0}")]
    UnsupportedElementType(ElementType),

    #[error("Wrong channel count: expected {expected}, got {actual}")]
    WrongChannelCount { expected: usize, actual: usize },

    #[error("Invalid image dimensions: {width}x{height}x{channels}")]
    InvalidDimensions {
        width: usize,
        height: usize,
        channels: usize,
    },

    #[error("Element count mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("Pixel out of bounds: ({x}, {y}) in image of size {width}x{height}")]
    IndexOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

/// Result type alias for imagetools operations
pub type Result<T> = std::result::Result<T, Error>;
