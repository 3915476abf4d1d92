//! Program Loader.
//!
//! Reads a flat binary image from disk. At most `limit` bytes are read (normally the RAM size),
//! mirroring how the image is later copied to the start of RAM; an empty file is a valid image.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::common::error::{Error, Result};

/// Reads up to `limit` bytes of the program image at `path`.
///
/// # Errors
///
/// Returns [`Error::ProgramRead`] if the file cannot be opened or read.
pub fn read_program(path: impl AsRef<Path>, limit: usize) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let wrap = |source| Error::ProgramRead {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(wrap)?;
    let mut image = Vec::new();
    let read = file
        .take(limit as u64)
        .read_to_end(&mut image)
        .map_err(wrap)?;
    tracing::debug!("Read {read} bytes from {}", path.display());
    Ok(image)
}
