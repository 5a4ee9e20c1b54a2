//! Tests for texture buffer assembly and the seeded generator

#[cfg(test)]
mod tests {
    use pvrtcgen::blocks::is_opaque_block;
    use pvrtcgen::container::write_header;
    use pvrtcgen::format::{Dimensions, TextureFormat};
    use pvrtcgen::generation::{TextureGenerator, assemble, generate, generate_square};
    use pvrtcgen::io::configuration::{HEADER_SIZE, PVR_VERSION_TAG};
    use pvrtcgen::{PvrtcError, RandomSource};
    use rand::{SeedableRng, rngs::StdRng};

    fn u32_at(bytes: &[u8], offset: usize) -> u32 {
        let field: [u8; 4] = bytes.get(offset..offset + 4).unwrap().try_into().unwrap();
        u32::from_le_bytes(field)
    }

    // Tests output length for 2bpp formats with and without header
    // Verified by using 4x4 blocks for every format
    #[test]
    fn test_2bpp_lengths() {
        let mut rng = StdRng::seed_from_u64(3);
        for format in [TextureFormat::Opaque2bit, TextureFormat::Transparent2bit] {
            for (width, height) in [(8, 8), (64, 16), (1024, 32)] {
                let expected = (width / 8 * height / 4 * 8) as usize;
                let with_header = generate(width, height, format, true, &mut rng).unwrap();
                let without_header = generate(width, height, format, false, &mut rng).unwrap();
                assert_eq!(with_header.len(), expected + 52);
                assert_eq!(without_header.len(), expected);
            }
        }
    }

    // Tests output length for 4bpp formats with and without header
    // Verified by using 8x4 blocks for every format
    #[test]
    fn test_4bpp_lengths() {
        let mut rng = StdRng::seed_from_u64(3);
        for format in [TextureFormat::Opaque4bit, TextureFormat::Transparent4bit] {
            for (width, height) in [(8, 8), (16, 64), (32, 1024)] {
                let expected = (width / 4 * height / 4 * 8) as usize;
                let with_header = generate(width, height, format, true, &mut rng).unwrap();
                let without_header = generate(width, height, format, false, &mut rng).unwrap();
                assert_eq!(with_header.len(), expected + 52);
                assert_eq!(without_header.len(), expected);
            }
        }
    }

    // Tests invalid width or height fails with the offending value
    // Verified by validating only the width
    #[test]
    fn test_invalid_dimensions_fail() {
        let mut rng = StdRng::seed_from_u64(3);
        let cases = [(4, 8, 4), (8, 4, 4), (8192, 8, 8192), (8, 100, 100), (0, 8, 0)];
        for (width, height, offending) in cases {
            let err = generate(width, height, TextureFormat::Opaque4bit, true, &mut rng).unwrap_err();
            assert!(
                matches!(err, PvrtcError::InvalidDimension { value } if value == offending),
                "{width}x{height}: {err}"
            );
        }
    }

    // Tests the smallest opaque texture without header
    // Verified by skipping the opacity transform
    #[test]
    fn test_smallest_opaque_texture() {
        let mut rng = StdRng::seed_from_u64(11);
        let bytes = generate(8, 8, TextureFormat::Opaque2bit, false, &mut rng).unwrap();
        assert_eq!(bytes.len(), 16);
        assert!(bytes.chunks_exact(8).all(is_opaque_block));
    }

    // Tests the reference texture length and header fields
    // Verified by writing width before height
    #[test]
    fn test_reference_texture() {
        let generator = TextureGenerator::with_seed(1337);
        let bytes = generator
            .generate(256, 256, TextureFormat::Transparent4bit, true)
            .unwrap();

        assert_eq!(bytes.len(), 256 * 256 / 2 + 52);
        assert_eq!(u32_at(&bytes, 0), PVR_VERSION_TAG);
        assert_eq!(u32_at(&bytes, 24), 256);
        assert_eq!(u32_at(&bytes, 28), 256);
    }

    // Tests header dimensions for rectangular textures
    // Verified by storing width in both fields
    #[test]
    fn test_rectangular_header() {
        let generator = TextureGenerator::with_seed(5);
        let bytes = generator
            .generate(1024, 16, TextureFormat::Opaque2bit, true)
            .unwrap();
        assert_eq!(u32_at(&bytes, 24), 16);
        assert_eq!(u32_at(&bytes, 28), 1024);
    }

    // Tests identical seeds give byte-identical output
    // Verified by keeping one random stream across calls
    #[test]
    fn test_seeded_generation_is_deterministic() {
        let generator = TextureGenerator::with_seed(1337);
        for format in TextureFormat::ALL {
            let first = generator.generate(128, 64, format, true).unwrap();
            let second = generator.generate(128, 64, format, true).unwrap();
            assert_eq!(first, second, "{format}");
        }

        let other = TextureGenerator::with_seed(1338)
            .generate(128, 64, TextureFormat::Transparent4bit, true)
            .unwrap();
        let reference = generator
            .generate(128, 64, TextureFormat::Transparent4bit, true)
            .unwrap();
        assert_ne!(other, reference);
    }

    // Tests set_seed switches between seeded and entropy modes
    // Verified by ignoring the new seed
    #[test]
    fn test_set_seed() {
        let mut generator = TextureGenerator::new();
        assert_eq!(generator.source(), RandomSource::Entropy);

        generator.set_seed(99);
        assert_eq!(generator.source(), RandomSource::Seeded(99));
        assert_eq!(
            generator.generate_square(32, TextureFormat::Opaque4bit, false).unwrap(),
            TextureGenerator::with_seed(99)
                .generate(32, 32, TextureFormat::Opaque4bit, false)
                .unwrap()
        );

        generator.set_seed(0);
        assert_eq!(generator.source(), RandomSource::Entropy);
    }

    // Tests unseeded generation differs between calls
    // Verified by using a fixed seed for entropy mode
    #[test]
    fn test_entropy_generation_differs() {
        let generator = TextureGenerator::new();
        let first = generator
            .generate(64, 64, TextureFormat::Transparent4bit, false)
            .unwrap();
        let second = generator
            .generate(64, 64, TextureFormat::Transparent4bit, false)
            .unwrap();
        assert_ne!(first, second);
    }

    // Tests header and block data stay separate
    // Verified by filling from offset 0 when a header is present
    #[test]
    fn test_header_precedes_block_data() {
        let with_header = TextureGenerator::with_seed(21)
            .generate(64, 64, TextureFormat::Transparent2bit, true)
            .unwrap();
        let without_header = TextureGenerator::with_seed(21)
            .generate(64, 64, TextureFormat::Transparent2bit, false)
            .unwrap();
        assert_eq!(with_header.get(HEADER_SIZE..), Some(&without_header[..]));
    }

    // Tests the buffer head is exactly the serialized header
    // Verified by skipping the header write in assemble
    #[test]
    fn test_head_matches_written_header() {
        let dimensions = Dimensions::new(32, 16).unwrap();
        let bytes = assemble(
            dimensions,
            TextureFormat::Opaque2bit,
            true,
            &mut StdRng::seed_from_u64(4),
        );
        assert_eq!(
            bytes.first_chunk::<HEADER_SIZE>(),
            Some(&write_header(dimensions, TextureFormat::Opaque2bit))
        );
    }

    // Tests opaque invariant over large outputs and its absence for transparent formats
    // Verified by transforming only the first block of each chunk
    #[test]
    fn test_opacity_invariant_by_format() {
        let generator = TextureGenerator::with_seed(7);
        for format in TextureFormat::ALL {
            let bytes = generator.generate(256, 256, format, true).unwrap();
            let blocks = bytes.get(HEADER_SIZE..).unwrap();
            let all_opaque = blocks.chunks_exact(8).all(is_opaque_block);
            assert_eq!(all_opaque, format.is_opaque(), "{format}");
        }
    }

    // Tests the square helper and assemble share the same layout
    // Verified by passing the side as width only
    #[test]
    fn test_square_and_assemble() {
        let square = generate_square(
            128,
            TextureFormat::Opaque4bit,
            true,
            &mut StdRng::seed_from_u64(8),
        )
        .unwrap();
        let assembled = assemble(
            Dimensions::square(128).unwrap(),
            TextureFormat::Opaque4bit,
            true,
            &mut StdRng::seed_from_u64(8),
        );
        assert_eq!(square, assembled);
    }
}
