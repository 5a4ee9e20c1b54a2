//! Texture format and size definitions

/// Size validation and block counting
pub mod dimensions;
/// PVRTC format variants and their block geometry
pub mod pvrtc;

pub use dimensions::{Dimensions, is_valid_dimension};
pub use pvrtc::{FormatTraits, TextureFormat};
