//! Compressed block data generation

/// Random block filling in two-block chunks
pub mod filler;
/// Bit constraints that force blocks to decode as opaque
pub mod opacity;

pub use filler::fill_blocks;
pub use opacity::{is_opaque_block, make_opaque};
