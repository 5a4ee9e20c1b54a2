//! Format constants and command-line defaults

use crate::format::TextureFormat;

// Legal texture side lengths, inclusive
/// Smallest supported width or height in pixels
pub const MIN_DIMENSION: u32 = 8;
/// Largest supported width or height in pixels
pub const MAX_DIMENSION: u32 = 4096;

/// Bytes in one compressed block
pub const BLOCK_SIZE: usize = 8;
/// Bytes drawn from the random source per step (two blocks)
pub const CHUNK_SIZE: usize = 2 * BLOCK_SIZE;

/// Size of a PVR v3 header without metadata
pub const HEADER_SIZE: usize = 52;
/// Version tag of the only supported header revision ("PVR\x03" on disk)
pub const PVR_VERSION_TAG: u32 = 0x0352_5650;

// Default values for configurable parameters
/// Side length used when no resolution is given
pub const DEFAULT_RESOLUTION: u32 = 8;
/// Format used when no format is given
pub const DEFAULT_FORMAT: TextureFormat = TextureFormat::Transparent4bit;
/// Whether a header is written when the flag is not given
pub const DEFAULT_INCLUDE_HEADER: bool = true;

// Reference output produced by `--test`
/// Seed of the reference texture
pub const TEST_SEED: u64 = 1337;
/// Side length of the reference texture
pub const TEST_RESOLUTION: u32 = 256;
/// Format of the reference texture
pub const TEST_FORMAT: TextureFormat = TextureFormat::Transparent4bit;

// Single literal behind both the constant and the CLI long version
macro_rules! generator_version {
    () => {
        "1.0"
    };
}
pub(crate) use generator_version;

/// Revision of the generator core, reported next to the program version
pub const GENERATOR_VERSION: &str = generator_version!();
