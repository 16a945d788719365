//! Extraction of a map's levelshots from an archive.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::archive::ReadableArchive;
use crate::config::MapOutcome;
use crate::error::{Error, Result};
use crate::naming::{levelshot_candidates, output_file_name, MapId};
use crate::transcode::Transcoder;

/// A levelshot that existed in the archive but could not be converted.
#[derive(Debug)]
pub struct LevelshotFailure {
    /// Map the levelshot belongs to
    pub map: MapId,
    /// Archive entry name of the levelshot
    pub entry: String,
    /// What went wrong
    pub error: Error,
}

/// Converts every levelshot of `map` found in `archive` into `output_dir`.
///
/// Both the plain and the color-corrected candidate are tried. A candidate
/// missing from the archive is skipped silently. A candidate that fails to
/// read, decode, encode or write is logged with the map identifier and
/// recorded in the returned [`MapOutcome`]; the other candidate is still
/// processed.
pub fn extract_levelshots(
    archive: &mut impl ReadableArchive,
    map: &MapId,
    transcoder: &impl Transcoder,
    output_dir: &Path,
) -> MapOutcome {
    let mut outcome = MapOutcome::default();

    for entry in levelshot_candidates(map) {
        if !archive.contains(&entry) {
            tracing::debug!(%map, %entry, "levelshot not present");
            continue;
        }

        match convert_entry(archive, &entry, transcoder, output_dir) {
            Ok(path) => {
                tracing::info!(%map, output = %path.display(), "wrote levelshot");
                outcome.written.push(path);
            }
            Err(error) => {
                tracing::error!(%map, %entry, %error, "failed to extract levelshot for {map}");
                outcome.failures.push(LevelshotFailure {
                    map: map.clone(),
                    entry,
                    error,
                });
            }
        }
    }

    outcome
}

/// Reads, transcodes and writes one levelshot entry.
fn convert_entry(
    archive: &mut impl ReadableArchive,
    entry: &str,
    transcoder: &impl Transcoder,
    output_dir: &Path,
) -> Result<PathBuf> {
    let file_name = output_file_name(entry).ok_or_else(|| Error::MissingEntry {
        name: entry.to_string(),
    })?;
    let destination = output_dir.join(file_name);

    let source = archive.read_entry(entry)?;
    let encoded = transcoder.transcode(&source)?;

    write_atomically(&destination, &encoded)?;
    Ok(destination)
}

/// Writes `contents` next to `destination` and renames it into place.
///
/// A failed write leaves any previous file at `destination` untouched.
fn write_atomically(destination: &Path, contents: &[u8]) -> Result<()> {
    let dir = destination.parent().unwrap_or_else(|| Path::new("."));
    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(contents)?;
    temp.flush()?;

    temp.persist(destination).map_err(|err| Error::Persist {
        path: destination.to_path_buf(),
        source: err.error,
    })?;
    Ok(())
}
