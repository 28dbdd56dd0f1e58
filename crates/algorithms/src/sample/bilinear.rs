//! Bilinear sampler

use imagetools_core::{ImageBuffer, ImageData, PixelElement};
use ndarray::ArrayView3;
use tracing::trace;

/// Sample `image` at `(x, y)` with bilinear interpolation, writing one value
/// per channel into `color`.
///
/// Values are raw magnitudes: ubyte images yield values in `[0, 255]`, not
/// `[0, 1]`. At most `color.len()` channels are written.
///
/// Images of an unsupported element type, or with no elements, leave
/// `color` untouched.
pub fn get_image_sub_pixel(image: &ImageBuffer, x: f32, y: f32, color: &mut [f32]) {
    match image.data() {
        ImageData::UByte(array) => sample_bilinear(array.view(), x, y, color),
        ImageData::Float(array) => sample_bilinear(array.view(), x, y, color),
        other => trace!(element_type = %other.element_type(), "sub-pixel sampling skipped"),
    }
}

/// Allocating variant of [`get_image_sub_pixel`].
///
/// Returns `None` where [`get_image_sub_pixel`] would leave its output
/// untouched.
pub fn sub_pixel(image: &ImageBuffer, x: f32, y: f32) -> Option<Vec<f32>> {
    if !image.is_valid() || !image.element_type().is_supported() {
        return None;
    }

    let mut color = vec![0.0; image.channels()];
    get_image_sub_pixel(image, x, y, &mut color);
    Some(color)
}

/// Bilinear interpolation over a `(height, width, channels)` view.
///
/// ```text
/// tl ── tr      A = tl + (bl - tl) * fy
///  │     │      B = tr + (br - tr) * fy
/// bl ── br      out = A + (B - A) * fx
/// ```
///
/// Empty views leave `color` untouched.
pub fn sample_bilinear<T: PixelElement>(img: ArrayView3<'_, T>, x: f32, y: f32, color: &mut [f32]) {
    let (height, width, channels) = img.dim();
    if width == 0 || height == 0 || channels == 0 {
        return;
    }

    let x = x.clamp(0.0, (width - 1) as f32);
    let y = y.clamp(0.0, (height - 1) as f32);

    // Coordinates are non-negative here, so truncation is floor. The min
    // guards against f32 rounding past the last index on very wide images.
    let x0 = (x as usize).min(width - 1);
    let y0 = (y as usize).min(height - 1);
    let fx = x - x0 as f32;
    let fy = y - y0 as f32;
    let x1 = (x0 + 1).min(width - 1);
    let y1 = (y0 + 1).min(height - 1);

    for (c, out) in color.iter_mut().take(channels).enumerate() {
        let tl = img[[y0, x0, c]].to_sample();
        let tr = img[[y0, x1, c]].to_sample();
        let bl = img[[y1, x0, c]].to_sample();
        let br = img[[y1, x1, c]].to_sample();

        let a = tl + (bl - tl) * fy;
        let b = tr + (br - tr) * fy;
        *out = a + (b - a) * fx;
    }
}
