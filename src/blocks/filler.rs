//! Random block data generation

use crate::blocks::opacity::make_opaque;
use crate::format::TextureFormat;
use crate::io::configuration::CHUNK_SIZE;
use rand::RngCore;

/// Fill `buffer[start_offset..]` with random block data for `format`
///
/// Bytes are drawn from `rng` two blocks at a time. Opaque formats get the
/// opacity constraints applied to every chunk before it is committed; all
/// byte patterns are valid for the transparent formats.
///
/// An offset past the end of the buffer leaves it unchanged.
pub fn fill_blocks<R>(buffer: &mut [u8], start_offset: usize, format: TextureFormat, rng: &mut R)
where
    R: RngCore + ?Sized,
{
    let Some(region) = buffer.get_mut(start_offset..) else {
        return;
    };

    let enforce_opaque = format.is_opaque();
    for chunk in region.chunks_mut(CHUNK_SIZE) {
        rng.fill_bytes(chunk);
        if enforce_opaque {
            make_opaque(chunk);
        }
    }
}
