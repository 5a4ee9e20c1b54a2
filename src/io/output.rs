//! Persisting generated textures without overwriting existing files

use crate::io::error::{PvrtcError, Result, file_system_error};
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::Path;
use tracing::info;

/// Fail early if `path` already exists
///
/// # Errors
///
/// Returns `OutputExists` if a file or directory is present at `path`
pub fn ensure_absent(path: &Path) -> Result<()> {
    if path.exists() {
        return Err(PvrtcError::OutputExists {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Write texture bytes to a new file
///
/// The file is created exclusively, so a file appearing between the
/// existence check and the write is still never overwritten.
///
/// # Errors
///
/// Returns `OutputExists` if the file already exists, or `FileSystem` if
/// the file cannot be created or written
pub fn write_texture_file(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|source| {
            if source.kind() == ErrorKind::AlreadyExists {
                PvrtcError::OutputExists {
                    path: path.to_path_buf(),
                }
            } else {
                file_system_error(path, "create file", source)
            }
        })?;

    file.write_all(bytes)
        .map_err(|source| file_system_error(path, "write texture", source))?;

    info!(path = %path.display(), bytes = bytes.len(), "Wrote texture");
    Ok(())
}

/// Write texture bytes to an arbitrary output stream
///
/// # Errors
///
/// Returns `FileSystem` if writing or flushing the stream fails
pub fn write_texture_stream<W: Write>(mut writer: W, bytes: &[u8]) -> Result<()> {
    writer
        .write_all(bytes)
        .and_then(|()| writer.flush())
        .map_err(|source| file_system_error("<stdout>", "write texture", source))
}
