//! High-level directory processing and CLI orchestration.

use std::io;
use std::path::Path;

use levelshot_core::{
    extract_levelshots, open_pk3, scan_maps, ExtractReport, ReadableArchive, Transcoder,
};

use crate::config::CliConfig;
use crate::error::{Error, InvocationError, Result};
use crate::io::{ensure_output_dir, list_archives};

/// Extracts the levelshots of every map in an already opened archive.
///
/// Maps are processed in the order the scanner yields them. Per-levelshot
/// failures are logged by the extractor and counted in `report`; they never
/// stop the remaining maps.
pub fn extract_archive(
    archive: &mut impl ReadableArchive,
    transcoder: &impl Transcoder,
    output_dir: &Path,
    report: &mut ExtractReport,
) {
    for map in scan_maps(archive) {
        let outcome = extract_levelshots(archive, &map, transcoder, output_dir);
        if outcome.is_empty() {
            tracing::debug!(%map, "map has no levelshots");
        }
        report.record_map(&outcome);
    }
}

/// Opens one archive from disk and extracts its levelshots.
///
/// The archive is closed before this function returns, on every path.
///
/// # Errors
///
/// Returns [`Error::OpenArchive`] if the file cannot be opened or is not a
/// valid archive. Levelshot failures inside the archive are not errors here;
/// they are counted in `report`.
pub fn process_archive(
    path: &Path,
    transcoder: &impl Transcoder,
    config: &CliConfig,
    report: &mut ExtractReport,
) -> Result<()> {
    let mut archive = open_pk3(path).map_err(|source| Error::OpenArchive {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(archive = %path.display(), "processing archive");
    report.archives_scanned += 1;
    extract_archive(&mut archive, transcoder, &config.output_dir, report);

    Ok(())
}

/// Runs a full extraction over the configured input directory.
///
/// The workflow is:
///
/// 1. Checks that the input directory exists
/// 2. Creates the output directory if needed
/// 3. Lists the `.pk3` archives in the input directory
/// 4. Scans each archive for maps and converts their levelshots
///
/// An archive that cannot be opened is logged and counted, and the run moves on
/// to the next archive.
///
/// # Errors
///
/// Returns an error in these cases:
///
/// - The input path does not exist or is not a directory
/// - The output directory cannot be created
/// - The input directory cannot be listed
pub fn run(config: &CliConfig, transcoder: &impl Transcoder) -> Result<ExtractReport> {
    let input = config.input_dir.as_path();
    if !input.exists() {
        return Err(Error::InputNotFound {
            path: input.to_path_buf(),
        });
    }
    if !input.is_dir() {
        return Err(Error::InputNotDirectory {
            path: input.to_path_buf(),
        });
    }

    ensure_output_dir(&config.output_dir)?;

    let mut report = ExtractReport::default();
    for archive in list_archives(input)? {
        if let Err(err) = process_archive(&archive, transcoder, config, &mut report) {
            tracing::error!("{err}");
            report.archives_failed += 1;
        }
    }

    Ok(report)
}

/// Runs the CLI over the configured input directory with error context.
///
/// This is a convenience wrapper around [`run`] that logs the run summary and
/// tags fatal errors with the program name for stderr reporting.
///
/// # Errors
///
/// Returns an error if [`run`] fails. Levelshot and archive failures are
/// logged, not returned.
pub fn run_cli(
    config: &CliConfig,
    transcoder: &impl Transcoder,
    program: &str,
) -> io::Result<ExtractReport> {
    let report = run(config, transcoder).map_err(|source| {
        let kind = source.kind();
        io::Error::new(
            kind,
            InvocationError {
                program: program.to_string(),
                source,
            },
        )
    })?;

    if report.is_clean() {
        tracing::info!("{report}");
    } else {
        tracing::warn!("{report}");
    }

    Ok(report)
}
