use std::io;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};
use std::str::Utf8Error;

/// Why the contents of a file could not be turned into an integer
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFailure {
    #[error("contents are not valid UTF-8 text")]
    NotUtf8(#[from] Utf8Error),
    #[error("failed to parse integer")]
    Integer(#[from] ParseIntError),
}

/// Errors returned by [`int_from_file`](super::int_from_file)
#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    /// The file could not be opened or read (missing, permission denied, a directory)
    #[error("failed to read file {}", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The file was read but does not hold a base-10 integer
    #[error("failed to parse contents of {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseFailure,
    },
}

impl ReadError {
    pub fn path(&self) -> &Path {
        match self {
            ReadError::FileNotFound { path, .. } | ReadError::Parse { path, .. } => path.as_path(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ReadError::FileNotFound { .. })
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, ReadError::Parse { .. })
    }
}
