//! Pixel element trait for generic channel values

use super::ImageData;
use ndarray::Array3;
use num_traits::{NumCast, Zero};
use std::fmt::{self, Debug};

/// Numeric representation of every stored channel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ElementType {
    /// 8-bit unsigned integer, normalized range 0..=255
    #[default]
    UByte,
    /// 16-bit unsigned integer. Storage only: no conversion accepts it.
    UShort,
    /// 32-bit floating point
    Float,
}

impl ElementType {
    /// Size of one element in bytes
    pub fn size_in_bytes(self) -> usize {
        match self {
            ElementType::UByte => 1,
            ElementType::UShort => 2,
            ElementType::Float => 4,
        }
    }

    /// Whether the converters and reducers operate on this type
    pub fn is_supported(self) -> bool {
        matches!(self, ElementType::UByte | ElementType::Float)
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementType::UByte => "ubyte",
            ElementType::UShort => "ushort",
            ElementType::Float => "float",
        };
        f.write_str(name)
    }
}

/// Trait for types that can be stored as image channel values.
///
/// Besides tying a Rust type to its [`ElementType`] tag, it carries the two
/// numeric views every transform needs:
/// - the *normalized* view (`normalize` / `denormalize`), where integer
///   types map onto `[0, 1]`
/// - the *sample* view (`to_sample` / `from_sample`), the raw magnitude as
///   `f32` with no rescaling
pub trait PixelElement:
    Copy + Clone + Debug + PartialOrd + PartialEq + NumCast + Zero + Send + Sync + 'static
{
    /// Tag stored alongside buffers of this type
    const ELEMENT_TYPE: ElementType;

    /// Scale to the normalized float range
    fn normalize(self) -> f32;

    /// Scale back from the normalized float range.
    ///
    /// Integer types clamp first and then truncate toward zero.
    fn denormalize(value: f32) -> Self;

    /// Raw magnitude as f32
    fn to_sample(self) -> f32;

    /// Store a raw f32 magnitude, truncating toward zero for integer types
    fn from_sample(value: f32) -> Self;

    /// Absolute raw magnitude
    fn magnitude(self) -> f32;

    /// Move a typed array into tagged storage
    fn wrap(array: Array3<Self>) -> ImageData;

    /// Borrow tagged storage as this type, if the tag matches
    fn unwrap_ref(data: &ImageData) -> Option<&Array3<Self>>;

    /// Mutably borrow tagged storage as this type, if the tag matches
    fn unwrap_mut(data: &mut ImageData) -> Option<&mut Array3<Self>>;
}

macro_rules! impl_pixel_element_uint {
    ($t:ty, $variant:ident) => {
        impl PixelElement for $t {
            const ELEMENT_TYPE: ElementType = ElementType::$variant;

            fn normalize(self) -> f32 {
                self as f32 / <$t>::MAX as f32
            }

            fn denormalize(value: f32) -> Self {
                let max = <$t>::MAX as f32;
                (value * max).clamp(0.0, max) as $t
            }

            fn to_sample(self) -> f32 {
                self as f32
            }

            fn from_sample(value: f32) -> Self {
                value as $t
            }

            fn magnitude(self) -> f32 {
                self as f32
            }

            fn wrap(array: Array3<Self>) -> ImageData {
                ImageData::$variant(array)
            }

            fn unwrap_ref(data: &ImageData) -> Option<&Array3<Self>> {
                match data {
                    ImageData::$variant(array) => Some(array),
                    _ => None,
                }
            }

            fn unwrap_mut(data: &mut ImageData) -> Option<&mut Array3<Self>> {
                match data {
                    ImageData::$variant(array) => Some(array),
                    _ => None,
                }
            }
        }
    };
}

impl_pixel_element_uint!(u8, UByte);
impl_pixel_element_uint!(u16, UShort);

impl PixelElement for f32 {
    const ELEMENT_TYPE: ElementType = ElementType::Float;

    fn normalize(self) -> f32 {
        self
    }

    fn denormalize(value: f32) -> Self {
        value
    }

    fn to_sample(self) -> f32 {
        self
    }

    fn from_sample(value: f32) -> Self {
        value
    }

    fn magnitude(self) -> f32 {
        self.abs()
    }

    fn wrap(array: Array3<Self>) -> ImageData {
        ImageData::Float(array)
    }

    fn unwrap_ref(data: &ImageData) -> Option<&Array3<Self>> {
        match data {
            ImageData::Float(array) => Some(array),
            _ => None,
        }
    }

    fn unwrap_mut(data: &mut ImageData) -> Option<&mut Array3<Self>> {
        match data {
            ImageData::Float(array) => Some(array),
            _ => None,
        }
    }
}
