//! Main image buffer type

use crate::error::{Error, Result};
use crate::raster::{ElementType, ImageData, PixelElement};
use ndarray::{Array3, ArrayView3, ArrayViewMut3};

/// An owned, type-tagged pixel buffer.
///
/// `ImageBuffer` stores `width * height * channels` elements of a single
/// [`ElementType`], row-major with interleaved channels. A buffer is either
/// empty (and therefore invalid for every transform) or fully populated.
///
/// Cloning performs a deep copy.
///
/// # Example
///
/// ```
/// use imagetools_core::{ElementType, ImageBuffer, Result};
///
/// # fn main() -> Result<()> {
/// // 4x2 RGBA image of zeros
/// let mut image = ImageBuffer::new(ElementType::UByte, 4, 2, 4)?;
/// assert_eq!(image.size(), 32);
///
/// if let Some(data) = image.as_mut_slice::<u8>() {
///     data[3] = 255;
/// }
/// assert_eq!(image.pixel::<u8>(0, 0)?, &[0, 0, 0, 255]);
///
/// // Typed access with the wrong element type yields nothing
/// assert!(image.as_slice::<f32>().is_none());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageBuffer {
    /// Element storage, shape (height, width, channels), standard layout
    data: ImageData,
}

impl ImageBuffer {
    /// The null buffer: no storage, invalid for every transform
    pub fn empty() -> Self {
        Self::default()
    }

    /// Allocate a zero-filled buffer
    pub fn new(
        element_type: ElementType,
        width: usize,
        height: usize,
        channels: usize,
    ) -> Result<Self> {
        let mut image = Self::empty();
        image.create(element_type, width, height, channels)?;
        Ok(image)
    }

    /// Create a buffer from existing row-major, channel-interleaved data
    pub fn from_vec<T: PixelElement>(
        width: usize,
        height: usize,
        channels: usize,
        data: Vec<T>,
    ) -> Result<Self> {
        let expected = checked_len(width, height, channels, T::ELEMENT_TYPE)?;
        if data.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        let actual = data.len();
        let array = Array3::from_shape_vec((height, width, channels), data)
            .map_err(|_| Error::SizeMismatch { expected, actual })?;

        Ok(Self {
            data: T::wrap(array),
        })
    }

    /// Wrap existing tagged storage.
    ///
    /// Arrays in a non-standard memory order are copied into standard
    /// layout so flattened access always sees row-major pixels.
    pub fn from_data(data: ImageData) -> Self {
        let data = match data {
            ImageData::UByte(a) => ImageData::UByte(into_standard_layout(a)),
            ImageData::UShort(a) => ImageData::UShort(into_standard_layout(a)),
            ImageData::Float(a) => ImageData::Float(into_standard_layout(a)),
        };
        Self { data }
    }

    /// (Re)allocate zero-filled storage for a new type and shape.
    ///
    /// Prior contents are discarded. On error the buffer is unchanged.
    pub fn create(
        &mut self,
        element_type: ElementType,
        width: usize,
        height: usize,
        channels: usize,
    ) -> Result<()> {
        checked_len(width, height, channels, element_type)?;
        self.data = ImageData::zeros(element_type, height, width, channels);
        Ok(())
    }

    // Dimensions

    /// Number of columns
    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    /// Channels per pixel
    pub fn channels(&self) -> usize {
        self.data.dim().2
    }

    pub fn element_type(&self) -> ElementType {
        self.data.element_type()
    }

    /// Total number of elements (`width * height * channels`)
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Storage size in bytes
    pub fn byte_size(&self) -> usize {
        self.size() * self.element_type().size_in_bytes()
    }

    /// A buffer is valid iff it holds at least one element
    pub fn is_valid(&self) -> bool {
        self.size() != 0
    }

    // Data access

    pub fn data(&self) -> &ImageData {
        &self.data
    }

    /// Consume the buffer and return its storage
    pub fn into_data(self) -> ImageData {
        self.data
    }

    /// Flattened elements, if `T` matches the element type
    pub fn as_slice<T: PixelElement>(&self) -> Option<&[T]> {
        T::unwrap_ref(&self.data).and_then(|a| a.as_slice())
    }

    /// Mutable flattened elements, if `T` matches the element type
    pub fn as_mut_slice<T: PixelElement>(&mut self) -> Option<&mut [T]> {
        T::unwrap_mut(&mut self.data).and_then(|a| a.as_slice_mut())
    }

    /// (height, width, channels) view, if `T` matches the element type
    pub fn view<T: PixelElement>(&self) -> Option<ArrayView3<'_, T>> {
        T::unwrap_ref(&self.data).map(|a| a.view())
    }

    /// Mutable (height, width, channels) view, if `T` matches the element type
    pub fn view_mut<T: PixelElement>(&mut self) -> Option<ArrayViewMut3<'_, T>> {
        T::unwrap_mut(&mut self.data).map(|a| a.view_mut())
    }

    /// Channels of the pixel at column `x`, row `y`
    pub fn pixel<T: PixelElement>(&self, x: usize, y: usize) -> Result<&[T]> {
        if x >= self.width() || y >= self.height() {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }

        let elements = self.as_slice::<T>().ok_or(Error::WrongSourceType {
            expected: T::ELEMENT_TYPE,
            actual: self.element_type(),
        })?;
        let channels = self.channels();
        let start = (y * self.width() + x) * channels;
        Ok(&elements[start..start + channels])
    }
}

/// Validity predicate accepting the absent ("null") buffer
pub fn is_image_valid(image: Option<&ImageBuffer>) -> bool {
    image.is_some_and(ImageBuffer::is_valid)
}

fn checked_len(
    width: usize,
    height: usize,
    channels: usize,
    element_type: ElementType,
) -> Result<usize> {
    let invalid = Error::InvalidDimensions {
        width,
        height,
        channels,
    };
    if channels == 0 {
        return Err(invalid);
    }

    let len = width.checked_mul(height).and_then(|n| n.checked_mul(channels));
    let bytes = len.and_then(|n| n.checked_mul(element_type.size_in_bytes()));
    match (len, bytes) {
        (Some(len), Some(bytes)) if bytes <= isize::MAX as usize => Ok(len),
        _ => Err(invalid),
    }
}

fn into_standard_layout<T: Clone>(array: Array3<T>) -> Array3<T> {
    if array.is_standard_layout() {
        array
    } else {
        array.as_standard_layout().into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::ShapeBuilder;

    #[test]
    fn test_buffer_creation() {
        let image = ImageBuffer::new(ElementType::Float, 20, 10, 3).unwrap();
        assert_eq!(image.width(), 20);
        assert_eq!(image.height(), 10);
        assert_eq!(image.channels(), 3);
        assert_eq!(image.size(), 600);
        assert_eq!(image.byte_size(), 2400);
        assert_eq!(image.element_type(), ElementType::Float);
        assert!(image.is_valid());
    }

    #[test]
    fn test_create_discards_prior_contents() {
        let mut image = ImageBuffer::from_vec(2, 1, 1, vec![9u8, 9]).unwrap();
        image.create(ElementType::Float, 3, 2, 1).unwrap();

        assert_eq!(image.element_type(), ElementType::Float);
        assert_eq!(image.as_slice::<f32>().unwrap(), &[0.0; 6]);
        assert!(image.as_slice::<u8>().is_none());
    }

    #[test]
    fn test_create_rejects_zero_channels() {
        let mut image = ImageBuffer::from_vec(2, 1, 1, vec![1u8, 2]).unwrap();
        let before = image.clone();

        let err = image.create(ElementType::UByte, 2, 1, 0).unwrap_err();
        assert!(matches!(err, Error::InvalidDimensions { channels: 0, .. }));
        assert_eq!(image, before);
    }

    #[test]
    fn test_create_rejects_overflow() {
        let mut image = ImageBuffer::empty();
        let err = image
            .create(ElementType::UByte, usize::MAX, 2, 1)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidDimensions { .. }));
    }

    #[test]
    fn test_from_vec_size_mismatch() {
        let err = ImageBuffer::from_vec(2, 2, 3, vec![0u8; 11]).unwrap_err();
        assert_eq!(
            err,
            Error::SizeMismatch {
                expected: 12,
                actual: 11
            }
        );
    }

    #[test]
    fn test_pixel_access() {
        let image =
            ImageBuffer::from_vec(2, 2, 2, vec![0u8, 1, 10, 11, 20, 21, 30, 31]).unwrap();
        assert_eq!(image.pixel::<u8>(1, 0).unwrap(), &[10, 11]);
        assert_eq!(image.pixel::<u8>(0, 1).unwrap(), &[20, 21]);
        assert!(matches!(
            image.pixel::<u8>(2, 0),
            Err(Error::IndexOutOfBounds { x: 2, .. })
        ));
        assert!(matches!(
            image.pixel::<f32>(0, 0),
            Err(Error::WrongSourceType { .. })
        ));
    }

    #[test]
    fn test_view_mut_writes_through() {
        let mut image = ImageBuffer::new(ElementType::UShort, 3, 2, 2).unwrap();
        image.view_mut::<u16>().unwrap()[[1, 2, 1]] = 500;

        assert_eq!(image.pixel::<u16>(2, 1).unwrap(), &[0, 500]);
        assert_eq!(image.view::<u16>().unwrap().dim(), (2, 3, 2));
        assert!(image.view_mut::<f32>().is_none());
    }

    #[test]
    fn test_clone_is_deep() {
        let original = ImageBuffer::from_vec(1, 1, 3, vec![1.0f32, 2.0, 3.0]).unwrap();
        let mut copy = original.clone();
        copy.as_mut_slice::<f32>().unwrap()[0] = 42.0;

        assert_eq!(original.as_slice::<f32>().unwrap(), &[1.0, 2.0, 3.0]);
        assert_eq!(copy.as_slice::<f32>().unwrap(), &[42.0, 2.0, 3.0]);
    }

    #[test]
    fn test_empty_is_invalid() {
        let image = ImageBuffer::empty();
        assert!(!image.is_valid());
        assert!(!is_image_valid(Some(&image)));
        assert!(!is_image_valid(None));

        let zero_width = ImageBuffer::new(ElementType::UByte, 0, 5, 3).unwrap();
        assert!(!zero_width.is_valid());
    }

    #[test]
    fn test_from_data_normalizes_layout() {
        // Column-major storage of a 1x2x2 array
        let array = Array3::from_shape_vec((1, 2, 2).f(), vec![1u8, 3, 2, 4]).unwrap();
        let image = ImageBuffer::from_data(ImageData::UByte(array));
        assert_eq!(image.as_slice::<u8>().unwrap(), &[1, 2, 3, 4]);
    }
}
