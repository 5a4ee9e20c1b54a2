//! Random PVRTC texture generation with an optional PVR v3 container header
//!
//! Textures are filled with pseudo-random block data. Opaque format variants
//! have their mode and colour flag bits constrained so every block decodes as
//! fully opaque, which makes the output usable as a decoder stress input.

#![forbid(unsafe_code)]

/// Compressed block data generation and opacity constraints
pub mod blocks;
/// PVR container header serialization
pub mod container;
/// Texture formats and size validation
pub mod format;
/// Buffer assembly and random source handling
pub mod generation;
/// Command-line layer, configuration, errors and file output
pub mod io;

pub use format::{Dimensions, TextureFormat};
pub use generation::{RandomSource, TextureGenerator, generate, generate_square};
pub use io::error::{PvrtcError, Result};
