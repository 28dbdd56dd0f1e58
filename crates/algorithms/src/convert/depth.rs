//! ubyte ↔ float conversion

use crate::rebuild::rebuild;
use imagetools_core::{Algorithm, Error, ImageBuffer, PixelElement, Result};
use tracing::debug;

/// ubyte → float conversion
#[derive(Debug, Clone, Default)]
pub struct ToFloat;

impl Algorithm for ToFloat {
    type Input = ImageBuffer;
    type Output = ImageBuffer;
    type Params = ();
    type Error = Error;

    fn name(&self) -> &'static str {
        "ToFloat"
    }

    fn description(&self) -> &'static str {
        "Convert a ubyte image to float, scaling each element into [0, 1]"
    }

    fn execute(&self, input: Self::Input, _params: Self::Params) -> Result<Self::Output> {
        let mut image = input;
        convert_to_float(&mut image)?;
        Ok(image)
    }
}

/// float → ubyte conversion
#[derive(Debug, Clone, Default)]
pub struct ToUbyte;

impl Algorithm for ToUbyte {
    type Input = ImageBuffer;
    type Output = ImageBuffer;
    type Params = ();
    type Error = Error;

    fn name(&self) -> &'static str {
        "ToUbyte"
    }

    fn description(&self) -> &'static str {
        "Convert a float image to ubyte, clamping to [0, 255] and truncating"
    }

    fn execute(&self, input: Self::Input, _params: Self::Params) -> Result<Self::Output> {
        let mut image = input;
        convert_to_ubyte(&mut image)?;
        Ok(image)
    }
}

/// Convert a ubyte image to float in place.
///
/// Each element becomes `v / 255.0`. Width, height and channel count are
/// preserved.
///
/// # Errors
/// - [`Error::InvalidBuffer`] if the image holds no elements
/// - [`Error::WrongSourceType`] if the image is not ubyte (already float, or
///   any other type)
///
/// The image is unchanged on error.
pub fn convert_to_float(image: &mut ImageBuffer) -> Result<()> {
    convert_elements::<u8, f32>(image)?;
    debug!(
        width = image.width(),
        height = image.height(),
        channels = image.channels(),
        "converted ubyte image to float"
    );
    Ok(())
}

/// Convert a float image to ubyte in place.
///
/// Each element becomes `clamp(v * 255, 0, 255)` truncated toward zero
/// (no rounding). NaN maps to 0.
///
/// # Errors
/// - [`Error::InvalidBuffer`] if the image holds no elements
/// - [`Error::WrongSourceType`] if the image is not float
///
/// The image is unchanged on error.
pub fn convert_to_ubyte(image: &mut ImageBuffer) -> Result<()> {
    convert_elements::<f32, u8>(image)?;
    debug!(
        width = image.width(),
        height = image.height(),
        channels = image.channels(),
        "converted float image to ubyte"
    );
    Ok(())
}

/// Rebuild `image` with element type `D`, mapping every element through
/// the normalized range: `D::denormalize(S::normalize(v))`.
///
/// Only the aggregate element count matters; channel layout is kept as is.
/// Both `S` and `D` must be ubyte or float.
pub(crate) fn convert_elements<S: PixelElement, D: PixelElement>(image: &mut ImageBuffer) -> Result<()> {
    if !image.is_valid() {
        return Err(Error::InvalidBuffer);
    }
    for element_type in [S::ELEMENT_TYPE, D::ELEMENT_TYPE] {
        if !element_type.is_supported() {
            return Err(Error::UnsupportedElementType(element_type));
        }
    }
    if image.element_type() != S::ELEMENT_TYPE {
        return Err(Error::WrongSourceType {
            expected: S::ELEMENT_TYPE,
            actual: image.element_type(),
        });
    }

    let channels = image.channels();
    rebuild::<S, D, _>(image, channels, |src, dst| {
        for (s, d) in src.iter().zip(dst.iter_mut()) {
            *d = D::denormalize(s.normalize());
        }
    })
}
