//! Texture buffer assembly: validation, header, block data

use crate::blocks::fill_blocks;
use crate::container::PvrHeader;
use crate::format::{Dimensions, TextureFormat};
use crate::generation::random::RandomSource;
use crate::io::configuration::HEADER_SIZE;
use crate::io::error::Result;
use rand::RngCore;
use tracing::debug;

/// Generate a random PVRTC texture drawing bytes from `rng`
///
/// The buffer holds an optional 52-byte header followed by 8 bytes per
/// block. Dimensions are validated before anything is allocated.
///
/// # Errors
///
/// Returns `InvalidDimension` if width or height is outside [8, 4096] or
/// not a power of two
pub fn generate<R>(
    width: u32,
    height: u32,
    format: TextureFormat,
    include_header: bool,
    rng: &mut R,
) -> Result<Vec<u8>>
where
    R: RngCore + ?Sized,
{
    let dimensions = Dimensions::new(width, height)?;
    Ok(assemble(dimensions, format, include_header, rng))
}

/// Generate a random square PVRTC texture
///
/// # Errors
///
/// Returns `InvalidDimension` if the side length is not supported
pub fn generate_square<R>(
    side: u32,
    format: TextureFormat,
    include_header: bool,
    rng: &mut R,
) -> Result<Vec<u8>>
where
    R: RngCore + ?Sized,
{
    generate(side, side, format, include_header, rng)
}

/// Assemble a texture for an already validated size
pub fn assemble<R>(
    dimensions: Dimensions,
    format: TextureFormat,
    include_header: bool,
    rng: &mut R,
) -> Vec<u8>
where
    R: RngCore + ?Sized,
{
    let header_len = if include_header { HEADER_SIZE } else { 0 };
    let block_count = dimensions.block_count(format);
    let total_len = header_len + dimensions.data_len(format);

    debug!(
        width = dimensions.width(),
        height = dimensions.height(),
        %format,
        include_header,
        block_count,
        total_len,
        "Assembling texture"
    );

    let mut buffer = vec![0_u8; total_len];
    if include_header && let Some(head) = buffer.first_chunk_mut::<HEADER_SIZE>() {
        PvrHeader::new(dimensions, format).write_to(head);
    }
    // Metadata would follow the header here; none is ever generated
    fill_blocks(&mut buffer, header_len, format, rng);

    buffer
}

/// Texture generator owning its random source
///
/// Every call starts a fresh stream from the source, so a seeded generator
/// returns byte-identical output for identical requests.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextureGenerator {
    source: RandomSource,
}

impl TextureGenerator {
    /// Create a generator drawing from fresh entropy
    pub const fn new() -> Self {
        Self {
            source: RandomSource::Entropy,
        }
    }

    /// Create a generator with a fixed seed (0 selects entropy)
    pub const fn with_seed(seed: u64) -> Self {
        Self {
            source: RandomSource::from_seed(seed),
        }
    }

    /// Replace the seed used by later generations (0 selects entropy)
    pub const fn set_seed(&mut self, seed: u64) {
        self.source = RandomSource::from_seed(seed);
    }

    /// Current random source
    pub const fn source(&self) -> RandomSource {
        self.source
    }

    /// Generate a texture from this generator's random source
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` if width or height is not supported
    pub fn generate(
        &self,
        width: u32,
        height: u32,
        format: TextureFormat,
        include_header: bool,
    ) -> Result<Vec<u8>> {
        let dimensions = Dimensions::new(width, height)?;
        let mut rng = self.source.rng();
        Ok(assemble(dimensions, format, include_header, &mut rng))
    }

    /// Generate a square texture from this generator's random source
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` if the side length is not supported
    pub fn generate_square(
        &self,
        side: u32,
        format: TextureFormat,
        include_header: bool,
    ) -> Result<Vec<u8>> {
        self.generate(side, side, format, include_header)
    }
}
