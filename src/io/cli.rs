//! Command-line interface for writing generated PVRTC textures to disk

use crate::format::TextureFormat;
use crate::generation::TextureGenerator;
use crate::io::configuration::{
    DEFAULT_FORMAT, DEFAULT_INCLUDE_HEADER, DEFAULT_RESOLUTION, TEST_FORMAT, TEST_RESOLUTION,
    TEST_SEED, generator_version,
};
use crate::io::error::{PvrtcError, Result};
use crate::io::output::{ensure_absent, write_texture_file, write_texture_stream};
use clap::{ArgAction, Parser};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{Level, debug};

/// Program and generator revisions reported by `--version`
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nPvrtcGen version: ",
    generator_version!()
);

#[derive(Parser, Debug)]
#[command(name = "pvrtcgen")]
#[command(
    author,
    version,
    long_version = LONG_VERSION,
    about = "Generate random PVRTC texture files"
)]
/// Command-line arguments for the texture generator
pub struct Cli {
    /// Resolution, e.g. 512 or 512x256. Values must be powers of two
    #[arg(short, long, default_value_t = Resolution::square(DEFAULT_RESOLUTION))]
    pub resolution: Resolution,

    /// Texture format: Opaque2bit, Opaque4bit, Transparent2bit or Transparent4bit
    #[arg(short, long, default_value_t = DEFAULT_FORMAT)]
    pub format: TextureFormat,

    /// Generate header: yes, no, true or false
    #[arg(
        long,
        action = ArgAction::Set,
        default_value_t = DEFAULT_INCLUDE_HEADER,
        value_parser = parse_header_flag
    )]
    pub header: bool,

    /// Filename (and path) for the generated texture file
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Random seed for reproducible output (0 draws fresh entropy)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Output the reference test texture (to --file, or standard output)
    #[arg(long)]
    pub test: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Most verbose level the logger should emit
    pub const fn log_level(&self) -> Level {
        if self.quiet { Level::WARN } else { Level::INFO }
    }
}

/// Requested texture size before validation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Resolution {
    /// Square resolution with equal width and height
    pub const fn square(side: u32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.width == self.height {
            write!(f, "{}", self.width)
        } else {
            write!(f, "{}x{}", self.width, self.height)
        }
    }
}

impl FromStr for Resolution {
    type Err = PvrtcError;

    // Accepts "N" for square textures or "WxH"; each side is parsed on its own
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let parse_side = |text: &str| {
            text.trim()
                .parse::<u32>()
                .map_err(|source| PvrtcError::InvalidResolution {
                    input: s.to_string(),
                    source,
                })
        };

        match lowered.split_once('x') {
            Some((width, height)) => Ok(Self {
                width: parse_side(width)?,
                height: parse_side(height)?,
            }),
            None => parse_side(&lowered).map(Self::square),
        }
    }
}

/// Parse a yes/no/true/false header flag, ignoring case
///
/// # Errors
///
/// Returns `InvalidHeaderFlag` for any other text
pub fn parse_header_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "yes" | "true" => Ok(true),
        "no" | "false" => Ok(false),
        _ => Err(PvrtcError::InvalidHeaderFlag {
            input: value.to_string(),
        }),
    }
}

/// Fully resolved parameters of one generation run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationSettings {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Texture format
    pub format: TextureFormat,
    /// Whether to prepend the PVR header
    pub include_header: bool,
    /// Seed for the random source (0 draws fresh entropy)
    pub seed: u64,
}

/// Runs one generation request from parsed command-line arguments
pub struct GenerationJob {
    cli: Cli,
}

impl GenerationJob {
    /// Create a job from parsed CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Parameters this job will generate with
    ///
    /// Test mode replaces size, format, header flag and seed with the
    /// reference texture's values.
    pub const fn settings(&self) -> GenerationSettings {
        if self.cli.test {
            return GenerationSettings {
                width: TEST_RESOLUTION,
                height: TEST_RESOLUTION,
                format: TEST_FORMAT,
                include_header: true,
                seed: TEST_SEED,
            };
        }

        let seed = match self.cli.seed {
            Some(seed) => seed,
            None => 0,
        };

        GenerationSettings {
            width: self.cli.resolution.width,
            height: self.cli.resolution.height,
            format: self.cli.format,
            include_header: self.cli.header,
            seed,
        }
    }

    /// Generate the texture and persist it
    ///
    /// # Errors
    ///
    /// Returns an error if no output is given outside test mode, the output
    /// file already exists, the dimensions are invalid, or writing fails
    pub fn process(&self) -> Result<()> {
        let output = match (&self.cli.file, self.cli.test) {
            (Some(path), _) => Some(path.as_path()),
            (None, true) => None,
            (None, false) => return Err(PvrtcError::MissingOutput),
        };

        // Refuse before generating so no work is spent on a doomed write
        if let Some(path) = output {
            ensure_absent(path)?;
        }

        let bytes = self.generate()?;

        match output {
            Some(path) => write_texture_file(path, &bytes),
            None => write_texture_stream(std::io::stdout().lock(), &bytes),
        }
    }

    /// Generate the texture bytes without writing them anywhere
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` if the requested size is not supported
    pub fn generate(&self) -> Result<Vec<u8>> {
        let settings = self.settings();
        debug!(?settings, "Generating texture");

        TextureGenerator::with_seed(settings.seed).generate(
            settings.width,
            settings.height,
            settings.format,
            settings.include_header,
        )
    }
}
