use crate::io::configuration::BLOCK_SIZE;
use bitvec::prelude::*;

// Bit positions inside one 8-byte block, counted LSB-first per byte
/// Modulation mode bit; cleared so the block uses opaque colour interpretation
pub const MODE_BIT: usize = 4 * 8;
/// Opaque flag of colour B
pub const COLOR_B_OPAQUE_BIT: usize = 5 * 8 + 7;
/// Opaque flag of colour A
pub const COLOR_A_OPAQUE_BIT: usize = 7 * 8 + 7;

/// Force every complete block in `bytes` to decode as fully opaque
///
/// Clears the mode bit and sets the opaque flag of both stored colours.
/// A trailing partial block is left unchanged.
pub fn make_opaque(bytes: &mut [u8]) {
    for block in bytes.chunks_exact_mut(BLOCK_SIZE) {
        let bits = block.view_bits_mut::<Lsb0>();
        bits.set(MODE_BIT, false);
        bits.set(COLOR_B_OPAQUE_BIT, true);
        bits.set(COLOR_A_OPAQUE_BIT, true);
    }
}

/// Test whether an 8-byte block satisfies the opacity constraints
///
/// Returns `false` for slices that are not exactly one block long.
pub fn is_opaque_block(block: &[u8]) -> bool {
    if block.len() != BLOCK_SIZE {
        return false;
    }
    let bits = block.view_bits::<Lsb0>();
    let bit = |index: usize| bits.get(index).as_deref() == Some(&true);

    !bit(MODE_BIT) && bit(COLOR_B_OPAQUE_BIT) && bit(COLOR_A_OPAQUE_BIT)
}
