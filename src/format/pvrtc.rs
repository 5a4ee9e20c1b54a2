//! PVRTC format variants and their block geometry

use crate::io::error::PvrtcError;
use std::fmt;
use std::str::FromStr;

/// Static properties shared by every texture of one format
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormatTraits {
    /// Pixels covered by one block horizontally
    pub block_width: u32,
    /// Pixels covered by one block vertically
    pub block_height: u32,
    /// Whether blocks are forced to decode as fully opaque
    pub enforce_opaque: bool,
}

const TRAITS_2BPP_OPAQUE: FormatTraits = FormatTraits {
    block_width: 8,
    block_height: 4,
    enforce_opaque: true,
};
const TRAITS_2BPP: FormatTraits = FormatTraits {
    block_width: 8,
    block_height: 4,
    enforce_opaque: false,
};
const TRAITS_4BPP_OPAQUE: FormatTraits = FormatTraits {
    block_width: 4,
    block_height: 4,
    enforce_opaque: true,
};
const TRAITS_4BPP: FormatTraits = FormatTraits {
    block_width: 4,
    block_height: 4,
    enforce_opaque: false,
};

/// Compressed pixel format of a generated texture
///
/// The discriminant is the pixel format code stored in the PVR header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TextureFormat {
    /// 2 bits per pixel, alpha forced opaque
    Opaque2bit = 0,
    /// 2 bits per pixel, unconstrained alpha
    Transparent2bit = 1,
    /// 4 bits per pixel, alpha forced opaque
    Opaque4bit = 2,
    /// 4 bits per pixel, unconstrained alpha
    Transparent4bit = 3,
}

impl TextureFormat {
    /// Every supported format, ordered by pixel format code
    pub const ALL: [Self; 4] = [
        Self::Opaque2bit,
        Self::Transparent2bit,
        Self::Opaque4bit,
        Self::Transparent4bit,
    ];

    /// Block geometry and opacity handling for this format
    pub const fn traits(self) -> FormatTraits {
        match self {
            Self::Opaque2bit => TRAITS_2BPP_OPAQUE,
            Self::Transparent2bit => TRAITS_2BPP,
            Self::Opaque4bit => TRAITS_4BPP_OPAQUE,
            Self::Transparent4bit => TRAITS_4BPP,
        }
    }

    /// Pixels covered by one block as (width, height)
    pub const fn block_dimensions(self) -> (u32, u32) {
        let traits = self.traits();
        (traits.block_width, traits.block_height)
    }

    /// Whether generated blocks must decode as fully opaque
    pub const fn is_opaque(self) -> bool {
        self.traits().enforce_opaque
    }

    /// Pixel format code written to the header
    pub const fn pixel_format_code(self) -> u64 {
        self as u64
    }

    /// Look up a format by its pixel format code
    pub const fn from_code(code: u64) -> Option<Self> {
        match code {
            0 => Some(Self::Opaque2bit),
            1 => Some(Self::Transparent2bit),
            2 => Some(Self::Opaque4bit),
            3 => Some(Self::Transparent4bit),
            _ => None,
        }
    }

    /// Canonical name, as accepted on the command line
    pub const fn name(self) -> &'static str {
        match self {
            Self::Opaque2bit => "Opaque2bit",
            Self::Transparent2bit => "Transparent2bit",
            Self::Opaque4bit => "Opaque4bit",
            Self::Transparent4bit => "Transparent4bit",
        }
    }
}

impl fmt::Display for TextureFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TextureFormat {
    type Err = PvrtcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| PvrtcError::InvalidFormat {
                input: s.to_string(),
            })
    }
}
