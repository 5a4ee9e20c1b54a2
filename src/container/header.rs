//! PVR v3 file header serialization
//!
//! Only the 52-byte header without metadata is produced. Every field is
//! written little-endian in the fixed order of the PVR container layout.

use crate::format::{Dimensions, TextureFormat};
use crate::io::configuration::{HEADER_SIZE, PVR_VERSION_TAG};

/// Colour space code for linear RGB
pub const COLOR_SPACE_LINEAR: u32 = 0;
/// Channel type code for unsigned normalised bytes
pub const CHANNEL_TYPE_UNSIGNED_BYTE_NORM: u32 = 0;

/// Fixed-layout PVR v3 header for a single 2D surface
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PvrHeader {
    /// Header revision tag
    pub version: u32,
    /// Header flags (bit 1 would mean premultiplied alpha)
    pub flags: u32,
    /// Pixel format code
    pub pixel_format: u64,
    /// Colour space code
    pub color_space: u32,
    /// Channel type code
    pub channel_type: u32,
    /// Height in pixels
    pub height: u32,
    /// Width in pixels
    pub width: u32,
    /// Depth in pixels, 1 for 2D textures
    pub depth: u32,
    /// Number of array surfaces
    pub num_surfaces: u32,
    /// Number of cube map faces
    pub num_faces: u32,
    /// Number of MIP levels including the base level
    pub mip_levels: u32,
    /// Bytes of metadata following the header
    pub meta_data_size: u32,
}

impl PvrHeader {
    /// Build the header for a single-surface, single-level 2D texture
    pub const fn new(dimensions: Dimensions, format: TextureFormat) -> Self {
        Self {
            version: PVR_VERSION_TAG,
            flags: 0,
            pixel_format: format.pixel_format_code(),
            color_space: COLOR_SPACE_LINEAR,
            channel_type: CHANNEL_TYPE_UNSIGNED_BYTE_NORM,
            height: dimensions.height(),
            width: dimensions.width(),
            depth: 1,
            num_surfaces: 1,
            num_faces: 1,
            mip_levels: 1,
            meta_data_size: 0,
        }
    }

    /// Serialize the header into its on-disk representation
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [0_u8; HEADER_SIZE];
        self.write_to(&mut bytes);
        bytes
    }

    /// Write every field, in container order, into a header-sized region
    pub fn write_to(&self, head: &mut [u8; HEADER_SIZE]) {
        let fields: [&[u8]; 12] = [
            &self.version.to_le_bytes(),
            &self.flags.to_le_bytes(),
            &self.pixel_format.to_le_bytes(),
            &self.color_space.to_le_bytes(),
            &self.channel_type.to_le_bytes(),
            &self.height.to_le_bytes(),
            &self.width.to_le_bytes(),
            &self.depth.to_le_bytes(),
            &self.num_surfaces.to_le_bytes(),
            &self.num_faces.to_le_bytes(),
            &self.mip_levels.to_le_bytes(),
            &self.meta_data_size.to_le_bytes(),
        ];

        for (target, &byte) in head.iter_mut().zip(fields.into_iter().flatten()) {
            *target = byte;
        }
    }
}

// Eleven u32 fields and the u64 pixel format fill the header exactly
const _: () = assert!(11 * size_of::<u32>() + size_of::<u64>() == HEADER_SIZE);

/// Serialize the header for a validated texture size and format
pub fn write_header(dimensions: Dimensions, format: TextureFormat) -> [u8; HEADER_SIZE] {
    PvrHeader::new(dimensions, format).to_bytes()
}
