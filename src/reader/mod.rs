mod error;

pub use error::{ParseFailure, ReadError};

use std::fs;
use std::path::Path;
use tracing::debug;

/// Read the whole file at `path` and parse its trimmed contents as a base-10 integer.
///
/// The file is read to completion and closed before parsing begins.
///
/// # Errors
///
/// Returns [`ReadError::FileNotFound`] if the file cannot be opened or read, and
/// [`ReadError::Parse`] if its contents are not an integer literal within `i64` range.
pub fn int_from_file<P: AsRef<Path>>(path: P) -> Result<i64, ReadError> {
    let path = path.as_ref();

    let bytes = fs::read(path).map_err(|source| ReadError::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), len = bytes.len(), "read file");

    let text = std::str::from_utf8(&bytes).map_err(|err| ReadError::Parse {
        path: path.to_path_buf(),
        source: err.into(),
    })?;

    parse_int(text).map_err(|source| ReadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse an optionally signed base-10 integer, ignoring surrounding whitespace
pub fn parse_int(text: &str) -> Result<i64, ParseFailure> {
    Ok(text.trim().parse::<i64>()?)
}
