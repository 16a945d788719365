//! Logging setup for the levelshot binaries.

use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;

/// Returns the default log directive for the configured verbosity.
///
/// `-q` keeps errors only; each `-v` raises the level one step from `info`.
pub fn log_filter(config: &CliConfig) -> &'static str {
    if config.quiet {
        return "error";
    }
    match config.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Installs a compact stderr subscriber.
///
/// `RUST_LOG` takes precedence over the verbosity flags when it is set. Calling
/// this more than once keeps the first subscriber.
pub fn init_logging(config: &CliConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_filter(config)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        // A subscriber is already installed
        .ok();
}
