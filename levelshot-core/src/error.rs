//! Error types and result handling for archive scanning and levelshot conversion.

use std::fmt;
use std::path::PathBuf;

pub use image::ImageError;
pub use zip::result::ZipError;

/// Result alias using the crate-level [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure modes of reading archives and converting levelshots.
#[derive(Debug)]
pub enum Error {
    /// I/O failure while reading an archive or writing an output file.
    Io(std::io::Error),

    /// The archive container could not be parsed or an entry could not be read.
    Archive(ZipError),

    /// An entry was requested that the archive does not contain.
    MissingEntry {
        /// Name of the requested entry
        name: String,
    },

    /// The levelshot bytes could not be decoded as the legacy image format.
    Decode(ImageError),

    /// The decoded image could not be encoded to the output format.
    Encode(ImageError),

    /// The converted image could not be moved to its final location.
    Persist {
        /// Destination path of the converted image
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "I/O error: {err}"),
            Error::Archive(err) => write!(f, "archive error: {err}"),
            Error::MissingEntry { name } => write!(f, "archive has no entry named '{name}'"),
            Error::Decode(err) => write!(f, "cannot decode levelshot: {err}"),
            Error::Encode(err) => write!(f, "cannot encode levelshot: {err}"),
            Error::Persist { path, source } => {
                write!(f, "cannot write '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Archive(err) => Some(err),
            Error::Decode(err) | Error::Encode(err) => Some(err),
            Error::Persist { source, .. } => Some(source),
            Error::MissingEntry { .. } => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<ZipError> for Error {
    fn from(err: ZipError) -> Self {
        match err {
            ZipError::Io(err) => Error::Io(err),
            other => Error::Archive(other),
        }
    }
}
