//! Read-only access to named archive entries.

use std::fs::File;
use std::io::{self, Read, Seek};
use std::path::Path;

use zip::result::ZipError;
use zip::ZipArchive;

use crate::error::{Error, Result};

/// Buffer size used when opening archives from disk.
pub const ARCHIVE_BUFFER_SIZE: usize = 64 * 1024;

/// A container of named entries that can be listed and read.
pub trait ReadableArchive {
    /// Returns every entry name in archive order.
    fn entry_names(&self) -> Vec<String>;

    /// Returns `true` if the archive holds an entry with exactly this name.
    fn contains(&self, name: &str) -> bool {
        self.entry_names().iter().any(|entry| entry == name)
    }

    /// Reads the full contents of the named entry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingEntry`] when no entry has this name, or an
    /// archive/I/O error when the entry cannot be decompressed.
    fn read_entry(&mut self, name: &str) -> Result<Vec<u8>>;
}

/// [`ReadableArchive`] backed by a zip container.
pub struct ZipArchiveReader<R> {
    inner: ZipArchive<R>,
}

/// A `.pk3` archive opened from disk.
pub type Pk3Archive = ZipArchiveReader<io::BufReader<File>>;

impl<R: Read + Seek> ZipArchiveReader<R> {
    /// Parses the central directory of a zip container.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Archive`] if the data is not a valid zip container.
    pub fn new(reader: R) -> Result<Self> {
        let inner = ZipArchive::new(reader)?;
        Ok(Self { inner })
    }

    /// Number of entries in the archive.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the archive holds no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<R: Read + Seek> ReadableArchive for ZipArchiveReader<R> {
    fn entry_names(&self) -> Vec<String> {
        self.inner.file_names().map(str::to_owned).collect()
    }

    fn contains(&self, name: &str) -> bool {
        self.inner.index_for_name(name).is_some()
    }

    fn read_entry(&mut self, name: &str) -> Result<Vec<u8>> {
        let mut entry = self.inner.by_name(name).map_err(|err| match err {
            ZipError::FileNotFound => Error::MissingEntry {
                name: name.to_string(),
            },
            other => Error::from(other),
        })?;

        // The declared size comes from the archive header and is only a hint
        let capacity = usize::try_from(entry.size())
            .unwrap_or(0)
            .min(ARCHIVE_BUFFER_SIZE);
        let mut contents = Vec::with_capacity(capacity);
        entry.read_to_end(&mut contents)?;
        Ok(contents)
    }
}

/// Opens a `.pk3` archive from disk.
///
/// The file handle lives as long as the returned archive and is released when
/// it is dropped.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened, or [`Error::Archive`]
/// if it is not a zip container.
pub fn open_pk3(path: &Path) -> Result<Pk3Archive> {
    let file = File::open(path)?;
    ZipArchiveReader::new(io::BufReader::with_capacity(ARCHIVE_BUFFER_SIZE, file))
}
