//! Element type conversion
//!
//! Elementwise transforms between the two supported storage types:
//! - ubyte → float: `v / 255`
//! - float → ubyte: `clamp(v * 255, 0, 255)`, truncated toward zero

mod depth;

pub use depth::{convert_to_float, convert_to_ubyte, ToFloat, ToUbyte};
