//! # imagetools core
//!
//! Core types and traits for in-memory image conversion.
//!
//! This crate provides:
//! - `ImageBuffer`: owned, type-tagged pixel buffer
//! - `ElementType` / `PixelElement`: element tags and the normalization trait
//! - `Algorithm`: common interface for buffer transforms
//! - `Error` / `Result`: shared error handling

pub mod error;
pub mod raster;

pub use error::{Error, Result};
pub use raster::{is_image_valid, ElementType, ImageBuffer, ImageData, PixelElement};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::raster::{ElementType, ImageBuffer, ImageData, PixelElement};
    pub use crate::Algorithm;
}

/// Core trait for all buffer transforms.
///
/// Each transform also exists as a free function that reshapes or retypes an
/// [`ImageBuffer`] in place through `&mut`. This trait wraps that call for
/// owned buffers: `execute` takes the buffer, applies the transform and hands
/// it back, or returns the error (dropping the input).
pub trait Algorithm {
    /// Input type for the algorithm
    type Input;
    /// Output type for the algorithm
    type Output;
    /// Parameters controlling algorithm behavior
    type Params: Default;
    /// Error type for algorithm execution
    type Error: std::error::Error;

    /// Returns the algorithm name
    fn name(&self) -> &'static str;

    /// Returns a description of what the algorithm does
    fn description(&self) -> &'static str;

    /// Execute the algorithm
    fn execute(&self, input: Self::Input, params: Self::Params) -> std::result::Result<Self::Output, Self::Error>;

    /// Execute with default parameters
    fn execute_default(&self, input: Self::Input) -> std::result::Result<Self::Output, Self::Error> {
        self.execute(input, Self::Params::default())
    }
}
