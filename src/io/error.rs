//! Error types for texture generation and the command-line layer

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for all generator operations
#[derive(Debug, Error)]
pub enum PvrtcError {
    /// Width or height is outside [8, 4096] or not a power of two
    #[error("Invalid texture dimension {value}: must be a power of two between 8 and 4096")]
    InvalidDimension {
        /// The rejected width or height
        value: u32,
    },

    /// Resolution text is neither `N` nor `WxH`
    #[error("Cannot convert '{input}' to resolution")]
    InvalidResolution {
        /// Text that failed to parse
        input: String,
        /// Underlying integer parse error
        #[source]
        source: std::num::ParseIntError,
    },

    /// Format name does not match any supported texture format
    #[error(
        "Cannot convert '{input}' to texture format (expected Opaque2bit, Transparent2bit, Opaque4bit or Transparent4bit)"
    )]
    InvalidFormat {
        /// Text that failed to parse
        input: String,
    },

    /// Header flag is not one of yes, no, true, false
    #[error("'{input}' is not a yes, no, true or false value")]
    InvalidHeaderFlag {
        /// Text that failed to parse
        input: String,
    },

    /// No output file was given outside test mode
    #[error("Missing --file parameter")]
    MissingOutput,

    /// Output file exists and will not be overwritten
    #[error("Can not overwrite file '{}'", path.display())]
    OutputExists {
        /// Path of the existing file
        path: PathBuf,
    },

    /// General file system operation failure
    #[error("File system error during {operation} on '{}': {source}", path.display())]
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for generator results
pub type Result<T> = std::result::Result<T, PvrtcError>;

/// Create a file system error for the given path and operation
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> PvrtcError {
    PvrtcError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
