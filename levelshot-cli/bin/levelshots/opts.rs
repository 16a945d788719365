//! Command line argument parsing for the levelshots utility.

use std::path::PathBuf;

use clap::Parser;

use levelshot_cli::CliConfig;

/// Extract and convert levelshots from pk3 files
///
/// Scans every `.pk3` archive in PATH for maps and writes their TGA
/// levelshots as JPEG files into `./levelshots`.
#[derive(Debug, Parser)]
#[command(
    name = "levelshots",
    version,
    about = "Extract and convert levelshots from pk3 files",
    long_about = "levelshots scans every .pk3 archive in PATH for maps, converts the \
                 matching levelshots/<map>.tga and levelshots/<map>_cc.tga images to \
                 JPEG and writes them into ./levelshots."
)]
pub struct LevelshotsOpts {
    /// Directory containing pk3 archives
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Verbose logging. Use twice for trace output.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    quiet: bool,
}

impl LevelshotsOpts {
    /// Parse command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Build CLI configuration from the parsed options
    pub fn config(&self) -> CliConfig {
        CliConfig {
            verbose: self.verbose,
            quiet: self.quiet,
            ..CliConfig::new(&self.path)
        }
    }
}
