//! Greyscale to RGB broadcast

use crate::rebuild::rebuild;
use imagetools_core::{Algorithm, ElementType, Error, ImageBuffer, PixelElement, Result};
use tracing::debug;

/// Grey → RGB algorithm
#[derive(Debug, Clone, Default)]
pub struct ToRgb;

impl Algorithm for ToRgb {
    type Input = ImageBuffer;
    type Output = ImageBuffer;
    type Params = ();
    type Error = Error;

    fn name(&self) -> &'static str {
        "ToRgb"
    }

    fn description(&self) -> &'static str {
        "Replicate a single-channel image into three channels"
    }

    fn execute(&self, input: Self::Input, _params: Self::Params) -> Result<Self::Output> {
        let mut image = input;
        convert_to_rgb(&mut image)?;
        Ok(image)
    }
}

/// Expand a single-channel image to 3 channels, copying the value into
/// each of them.
///
/// # Errors
/// - [`Error::InvalidBuffer`] if the image holds no elements
/// - [`Error::WrongChannelCount`] unless the image has exactly 1 channel
/// - [`Error::UnsupportedElementType`] for types other than ubyte and float
pub fn convert_to_rgb(image: &mut ImageBuffer) -> Result<()> {
    if !image.is_valid() {
        return Err(Error::InvalidBuffer);
    }
    if image.channels() != 1 {
        return Err(Error::WrongChannelCount {
            expected: 1,
            actual: image.channels(),
        });
    }

    match image.element_type() {
        ElementType::UByte => broadcast::<u8>(image)?,
        ElementType::Float => broadcast::<f32>(image)?,
        other => return Err(Error::UnsupportedElementType(other)),
    }

    debug!(
        width = image.width(),
        height = image.height(),
        element_type = %image.element_type(),
        "expanded greyscale image to rgb"
    );
    Ok(())
}

fn broadcast<T: PixelElement>(image: &mut ImageBuffer) -> Result<()> {
    rebuild::<T, T, _>(image, 3, |src, dst| dst.fill(src[0]))
}
