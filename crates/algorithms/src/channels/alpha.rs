//! Alpha channel extraction

use crate::rebuild::rebuild;
use imagetools_core::{Algorithm, ElementType, Error, ImageBuffer, PixelElement, Result};
use tracing::debug;

/// Alpha extraction algorithm
#[derive(Debug, Clone, Default)]
pub struct AlphaToGreyscale;

impl Algorithm for AlphaToGreyscale {
    type Input = ImageBuffer;
    type Output = ImageBuffer;
    type Params = ();
    type Error = Error;

    fn name(&self) -> &'static str {
        "AlphaToGreyscale"
    }

    fn description(&self) -> &'static str {
        "Replace a 4-channel image with its alpha channel"
    }

    fn execute(&self, input: Self::Input, _params: Self::Params) -> Result<Self::Output> {
        let mut image = input;
        convert_alpha_to_greyscale(&mut image)?;
        Ok(image)
    }
}

/// Replace a 4-channel image with a single channel holding each pixel's
/// alpha (4th) value.
///
/// # Errors
/// - [`Error::InvalidBuffer`] if the image holds no elements
/// - [`Error::WrongChannelCount`] unless the image has exactly 4 channels
/// - [`Error::UnsupportedElementType`] for types other than ubyte and float
pub fn convert_alpha_to_greyscale(image: &mut ImageBuffer) -> Result<()> {
    if !image.is_valid() {
        return Err(Error::InvalidBuffer);
    }
    if image.channels() != 4 {
        return Err(Error::WrongChannelCount {
            expected: 4,
            actual: image.channels(),
        });
    }

    match image.element_type() {
        ElementType::UByte => extract_alpha::<u8>(image)?,
        ElementType::Float => extract_alpha::<f32>(image)?,
        other => return Err(Error::UnsupportedElementType(other)),
    }

    debug!(
        width = image.width(),
        height = image.height(),
        element_type = %image.element_type(),
        "extracted alpha channel"
    );
    Ok(())
}

fn extract_alpha<T: PixelElement>(image: &mut ImageBuffer) -> Result<()> {
    rebuild::<T, T, _>(image, 1, |src, dst| dst[0] = src[3])
}
