//! Snapshot-then-rebuild helper shared by every shape or type changing transform.

use imagetools_core::{Error, ImageBuffer, PixelElement, Result};

/// Replace `image` with freshly allocated storage of `D` elements and
/// `out_channels` channels, filled pixel by pixel from the current contents
/// read as `S`.
///
/// `fill` receives one source pixel and the matching destination pixel.
/// The old storage is dropped only once the new buffer is complete, so any
/// error leaves `image` untouched. Fails only on an empty or mistyped source
/// and on zero output channels.
pub(crate) fn rebuild<S, D, F>(image: &mut ImageBuffer, out_channels: usize, mut fill: F) -> Result<()>
where
    S: PixelElement,
    D: PixelElement,
    F: FnMut(&[S], &mut [D]),
{
    if !image.is_valid() {
        return Err(Error::InvalidBuffer);
    }

    let channels = image.channels();
    let src = image.as_slice::<S>().ok_or(Error::WrongSourceType {
        expected: S::ELEMENT_TYPE,
        actual: image.element_type(),
    })?;

    if out_channels == 0 {
        return Err(Error::InvalidDimensions {
            width: image.width(),
            height: image.height(),
            channels: out_channels,
        });
    }

    let pixels = image.width() * image.height();
    let mut dst = vec![D::from_sample(0.0); pixels * out_channels];
    for (src_px, dst_px) in src.chunks_exact(channels).zip(dst.chunks_exact_mut(out_channels)) {
        fill(src_px, dst_px);
    }

    *image = ImageBuffer::from_vec(image.width(), image.height(), out_channels, dst)?;
    Ok(())
}
