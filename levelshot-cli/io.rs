//! Directory handling for the levelshot CLI.

use std::fs;
use std::path::{Path, PathBuf};

use levelshot_core::naming::is_archive_name;

use crate::error::{Error, Result};

/// Creates the output directory and any missing parents.
///
/// An existing directory is not an error.
///
/// # Errors
///
/// Returns [`Error::CreateOutputDir`] if the directory cannot be created.
pub fn ensure_output_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| Error::CreateOutputDir {
        path: path.to_path_buf(),
        source,
    })
}

/// Lists the archives directly inside `dir`.
///
/// Only regular files whose name ends in `.pk3` are returned, in directory
/// listing order. Subdirectories are not descended into.
///
/// # Errors
///
/// Returns [`Error::ReadInputDir`] if the directory cannot be listed.
pub fn list_archives(dir: &Path) -> Result<Vec<PathBuf>> {
    let read_err = |source| Error::ReadInputDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut archives = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let path = entry.path();

        let is_archive = entry
            .file_name()
            .to_str()
            .is_some_and(is_archive_name);
        if !is_archive {
            continue;
        }

        // Follow symlinks so linked archives are picked up too
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "skipping non-file archive entry");
            continue;
        }

        archives.push(path);
    }

    Ok(archives)
}
