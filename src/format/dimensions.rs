//! Texture size validation and block counting

use crate::format::TextureFormat;
use crate::io::configuration::{BLOCK_SIZE, MAX_DIMENSION, MIN_DIMENSION};
use crate::io::error::{PvrtcError, Result};

/// Test a single width or height against the supported size domain
///
/// Sizes must lie in [8, 4096] and be an exact power of two.
pub const fn is_valid_dimension(n: u32) -> bool {
    if n < MIN_DIMENSION || n > MAX_DIMENSION {
        return false;
    }
    // n > 0 is implied by the range check
    n & (n - 1) == 0
}

/// Validated texture size in pixels
///
/// Width and height are checked independently and need not be equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dimensions {
    width: u32,
    height: u32,
}

impl Dimensions {
    /// Validate a width and height pair
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` carrying the first offending value,
    /// width before height
    pub const fn new(width: u32, height: u32) -> Result<Self> {
        if !is_valid_dimension(width) {
            return Err(PvrtcError::InvalidDimension { value: width });
        }
        if !is_valid_dimension(height) {
            return Err(PvrtcError::InvalidDimension { value: height });
        }
        Ok(Self { width, height })
    }

    /// Validate a square texture size
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` if the side length is not supported
    pub const fn square(side: u32) -> Result<Self> {
        Self::new(side, side)
    }

    /// Width in pixels
    pub const fn width(self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub const fn height(self) -> u32 {
        self.height
    }

    /// Number of compressed blocks covering the texture
    pub const fn block_count(self, format: TextureFormat) -> usize {
        let (block_width, block_height) = format.block_dimensions();
        (self.width / block_width) as usize * (self.height / block_height) as usize
    }

    /// Bytes of block data for the texture, excluding any header
    pub const fn data_len(self, format: TextureFormat) -> usize {
        self.block_count(format) * BLOCK_SIZE
    }
}
