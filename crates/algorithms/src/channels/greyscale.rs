//! Greyscale reduction
//!
//! Three-channel images use a weighted sum of R, G and B. Every other
//! channel count uses the mean channel magnitude: float channels contribute
//! their absolute value so signed data does not cancel out.

use crate::rebuild::rebuild;
use imagetools_core::{Algorithm, ElementType, Error, ImageBuffer, PixelElement, Result};
use tracing::debug;

/// Parameters for greyscale reduction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GreyscaleParams {
    /// Weight of the red channel for 3-channel images
    pub red: f32,
    /// Weight of the green channel for 3-channel images
    pub green: f32,
    /// Weight of the blue channel for 3-channel images
    pub blue: f32,
}

impl Default for GreyscaleParams {
    /// 0.3 / 0.5 / 0.2. These are not the ITU-R BT.601 luma coefficients.
    fn default() -> Self {
        Self {
            red: 0.3,
            green: 0.5,
            blue: 0.2,
        }
    }
}

/// Greyscale algorithm
#[derive(Debug, Clone, Default)]
pub struct Greyscale;

impl Algorithm for Greyscale {
    type Input = ImageBuffer;
    type Output = ImageBuffer;
    type Params = GreyscaleParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Greyscale"
    }

    fn description(&self) -> &'static str {
        "Reduce an image to one channel by weighted RGB luminance or mean channel magnitude"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        let mut image = input;
        convert_to_greyscale_with(&mut image, &params)?;
        Ok(image)
    }
}

/// Reduce an image to a single channel using the default weights.
///
/// See [`convert_to_greyscale_with`].
pub fn convert_to_greyscale(image: &mut ImageBuffer) -> Result<()> {
    convert_to_greyscale_with(image, &GreyscaleParams::default())
}

/// Reduce an image to a single channel.
///
/// - 3 channels: `red * R + green * G + blue * B`
/// - any other count: mean of the channel magnitudes
///
/// Sums are computed in f32. Ubyte results are truncated toward zero when
/// stored.
///
/// # Errors
/// - [`Error::InvalidBuffer`] if the image holds no elements
/// - [`Error::UnsupportedElementType`] for types other than ubyte and float
pub fn convert_to_greyscale_with(image: &mut ImageBuffer, params: &GreyscaleParams) -> Result<()> {
    if !image.is_valid() {
        return Err(Error::InvalidBuffer);
    }

    let channels = image.channels();
    match image.element_type() {
        ElementType::UByte => reduce::<u8>(image, params)?,
        ElementType::Float => reduce::<f32>(image, params)?,
        other => return Err(Error::UnsupportedElementType(other)),
    }

    debug!(
        width = image.width(),
        height = image.height(),
        channels,
        element_type = %image.element_type(),
        "converted image to greyscale"
    );
    Ok(())
}

fn reduce<T: PixelElement>(image: &mut ImageBuffer, params: &GreyscaleParams) -> Result<()> {
    if image.channels() == 3 {
        let GreyscaleParams { red, green, blue } = *params;
        rebuild::<T, T, _>(image, 1, |src, dst| {
            let value =
                src[0].to_sample() * red + src[1].to_sample() * green + src[2].to_sample() * blue;
            dst[0] = T::from_sample(value);
        })
    } else {
        rebuild::<T, T, _>(image, 1, |src, dst| {
            let sum: f32 = src.iter().map(|v| v.magnitude()).sum();
            dst[0] = T::from_sample(sum / src.len() as f32);
        })
    }
}
