//! Texture container formats

/// PVR v3 file header serialization
pub mod header;

pub use header::{PvrHeader, write_header};
