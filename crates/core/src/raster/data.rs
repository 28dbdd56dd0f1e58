//! Type-tagged element storage

use super::{ElementType, PixelElement};
use ndarray::Array3;

/// Owned element storage, one variant per [`ElementType`].
///
/// Arrays have shape `(height, width, channels)` in standard layout, so the
/// flattened element order is row-major pixels with interleaved channels.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageData {
    UByte(Array3<u8>),
    UShort(Array3<u16>),
    Float(Array3<f32>),
}

impl ImageData {
    /// Zero-filled storage of the given type and shape
    pub fn zeros(element_type: ElementType, height: usize, width: usize, channels: usize) -> Self {
        let shape = (height, width, channels);
        match element_type {
            ElementType::UByte => ImageData::UByte(Array3::zeros(shape)),
            ElementType::UShort => ImageData::UShort(Array3::zeros(shape)),
            ElementType::Float => ImageData::Float(Array3::zeros(shape)),
        }
    }

    pub fn element_type(&self) -> ElementType {
        match self {
            ImageData::UByte(_) => ElementType::UByte,
            ImageData::UShort(_) => ElementType::UShort,
            ImageData::Float(_) => ElementType::Float,
        }
    }

    /// Shape as (height, width, channels)
    pub fn dim(&self) -> (usize, usize, usize) {
        match self {
            ImageData::UByte(a) => a.dim(),
            ImageData::UShort(a) => a.dim(),
            ImageData::Float(a) => a.dim(),
        }
    }

    /// Total number of elements
    pub fn len(&self) -> usize {
        match self {
            ImageData::UByte(a) => a.len(),
            ImageData::UShort(a) => a.len(),
            ImageData::Float(a) => a.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow as a typed array
    pub fn as_array<T: PixelElement>(&self) -> Option<&Array3<T>> {
        T::unwrap_ref(self)
    }

    /// Mutably borrow as a typed array
    pub fn as_array_mut<T: PixelElement>(&mut self) -> Option<&mut Array3<T>> {
        T::unwrap_mut(self)
    }
}

impl Default for ImageData {
    fn default() -> Self {
        ImageData::UByte(Array3::zeros((0, 0, 0)))
    }
}

impl From<Array3<u8>> for ImageData {
    fn from(array: Array3<u8>) -> Self {
        ImageData::UByte(array)
    }
}

impl From<Array3<u16>> for ImageData {
    fn from(array: Array3<u16>) -> Self {
        ImageData::UShort(array)
    }
}

impl From<Array3<f32>> for ImageData {
    fn from(array: Array3<f32>) -> Self {
        ImageData::Float(array)
    }
}
