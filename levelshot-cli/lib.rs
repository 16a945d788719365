//! Command-line driver for extracting map levelshots from pk3 archives.
//!
//! This crate walks a directory of archives, hands each one to
//! [`levelshot_core`] for scanning and conversion, and owns everything that
//! belongs to the command line: configuration, fatal error reporting and
//! logging setup.

pub mod config;
pub mod error;
pub mod io;
pub mod logging;
pub mod process;


pub use config::{CliConfig, DEFAULT_OUTPUT_DIR};
pub use error::{format_error_for_stderr, Error, Result};
pub use io::{ensure_output_dir, list_archives};
pub use logging::{init_logging, log_filter};
pub use process::{extract_archive, process_archive, run, run_cli};
