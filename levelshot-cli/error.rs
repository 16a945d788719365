//! Error types for levelshot CLI operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A CLI failure tagged with the program that produced it.
#[derive(Debug)]
pub struct InvocationError {
    /// Program name to prefix in error output (e.g. "levelshots").
    pub program: String,
    /// Underlying error produced by the run.
    pub source: Error,
}

impl std::fmt::Display for InvocationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.program, self.source)
    }
}

impl std::error::Error for InvocationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Formats an error returned by [`crate::run_cli`] as a single stderr line.
///
/// Errors carrying an [`InvocationError`] already name the program; anything
/// else is prefixed with `program`.
pub fn format_error_for_stderr(program: &str, err: &io::Error) -> String {
    match err
        .get_ref()
        .and_then(|e| e.downcast_ref::<InvocationError>())
    {
        Some(run_err) => run_err.to_string(),
        None => format!("{program}: {err}"),
    }
}

/// Main error type for levelshot CLI operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The input directory does not exist
    #[error("{}: No such file or directory", path.display())]
    InputNotFound {
        /// Path given on the command line
        path: PathBuf,
    },

    /// The input path exists but is not a directory
    #[error("{}: Not a directory", path.display())]
    InputNotDirectory {
        /// Path given on the command line
        path: PathBuf,
    },

    /// The input directory could not be listed
    #[error("{}: Cannot read directory: {source}", path.display())]
    ReadInputDir {
        /// Path to the input directory
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The output directory could not be created
    #[error("{}: Cannot create output directory: {source}", path.display())]
    CreateOutputDir {
        /// Path to the output directory
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// An archive could not be opened or parsed
    #[error("{}: Cannot open archive: {source}", path.display())]
    OpenArchive {
        /// Path to the archive
        path: PathBuf,
        /// Underlying archive error
        #[source]
        source: levelshot_core::Error,
    },
}

/// Specialized `Result` type for levelshot CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// The [`io::ErrorKind`] that best describes this failure.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Error::InputNotFound { .. } => io::ErrorKind::NotFound,
            Error::InputNotDirectory { .. } => io::ErrorKind::InvalidInput,
            Error::OpenArchive { .. } => io::ErrorKind::InvalidData,
            // Preserve the original error kind
            Error::ReadInputDir { source, .. } | Error::CreateOutputDir { source, .. } => {
                source.kind()
            }
        }
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        io::Error::new(err.kind(), err)
    }
}
