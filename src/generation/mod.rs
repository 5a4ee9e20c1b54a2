/// Texture buffer assembly and the seeded generator
pub mod assembler;
/// Random source selection
pub mod random;

pub use assembler::{TextureGenerator, assemble, generate, generate_square};
pub use random::RandomSource;
