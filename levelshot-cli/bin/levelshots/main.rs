//! Levelshot extraction utility
//!
//! Walks a directory of pk3 archives and converts every map levelshot it finds
//! from TGA to JPEG.

use std::process;

mod opts;

use opts::LevelshotsOpts;

use levelshot_cli::{format_error_for_stderr, init_logging, run_cli};
use levelshot_core::TgaToJpeg;

const PROGRAM_NAME: &str = "levelshots";

fn main() -> std::io::Result<()> {
    let opts = LevelshotsOpts::parse();
    let config = opts.config();

    init_logging(&config);

    if let Err(err) = run_cli(&config, &TgaToJpeg::new(), PROGRAM_NAME) {
        eprintln!("{}", format_error_for_stderr(PROGRAM_NAME, &err));
        process::exit(1);
    }

    Ok(())
}
