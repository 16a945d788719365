//! Configuration types and constants for the levelshot CLI.

use std::path::PathBuf;

use levelshot_core::naming::LEVELSHOT_DIR;

/// Output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = LEVELSHOT_DIR;

/// Configuration for an extraction run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Directory containing the archives to scan
    pub input_dir: PathBuf,
    /// Directory receiving converted levelshots
    pub output_dir: PathBuf,
    /// Verbosity level (number of `-v` occurrences)
    pub verbose: u8,
    /// Only report errors
    pub quiet: bool,
}

impl CliConfig {
    /// Creates a configuration for `input_dir` with default settings.
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            ..Self::default()
        }
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            verbose: 0,
            quiet: false,
        }
    }
}
