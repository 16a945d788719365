//! Naming conventions for map descriptors, levelshot entries and output files.

use std::fmt;
use std::path::Path;

/// Extension of the entry that marks a playable map.
pub const MAP_EXTENSION: &str = "bsp";

/// Extension of the archives scanned for maps.
pub const ARCHIVE_EXTENSION: &str = "pk3";

/// Directory prefix of levelshot entries inside an archive, and the default
/// output directory name.
pub const LEVELSHOT_DIR: &str = "levelshots";

/// Extension of levelshot entries inside an archive.
pub const LEVELSHOT_EXTENSION: &str = "tga";

/// Extension of converted levelshots.
pub const OUTPUT_EXTENSION: &str = "jpg";

/// Basename suffix of the color-corrected levelshot variant.
pub const COLOR_CORRECTED_SUFFIX: &str = "_cc";

/// Identifier of a map inside an archive, e.g. `q3dm17`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MapId(String);

impl MapId {
    /// Wraps a raw map name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The map name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MapId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Derives a map identifier from an archive entry name.
///
/// Only entries ending in `.bsp` qualify. The identifier is the second
/// `/`-separated segment with the `.bsp` suffix removed, so `maps/q3dm1.bsp`
/// yields `q3dm1`. Entries with a single segment or an empty identifier yield
/// `None`.
pub fn map_id_from_entry(name: &str) -> Option<MapId> {
    let suffix = format!(".{MAP_EXTENSION}");
    if !name.ends_with(&suffix) {
        return None;
    }

    let segment = name.split('/').nth(1)?;
    let id = segment.strip_suffix(&suffix).unwrap_or(segment);
    if id.is_empty() {
        return None;
    }

    Some(MapId::new(id))
}

/// Returns the two archive entry names that may hold levelshots for `map`.
///
/// The plain variant comes first, the color-corrected variant second.
pub fn levelshot_candidates(map: &MapId) -> [String; 2] {
    [
        format!("{LEVELSHOT_DIR}/{map}.{LEVELSHOT_EXTENSION}"),
        format!("{LEVELSHOT_DIR}/{map}{COLOR_CORRECTED_SUFFIX}.{LEVELSHOT_EXTENSION}"),
    ]
}

/// Returns the output file name for a levelshot entry.
///
/// The entry's basename keeps everything up to its last extension, which is
/// replaced with `jpg`: `levelshots/q3dm1_cc.tga` becomes `q3dm1_cc.jpg`.
pub fn output_file_name(entry: &str) -> Option<String> {
    let stem = Path::new(entry).file_stem()?.to_str()?;
    if stem.is_empty() {
        return None;
    }
    Some(format!("{stem}.{OUTPUT_EXTENSION}"))
}

/// Checks whether a file name carries the archive extension.
///
/// The comparison is case sensitive.
pub fn is_archive_name(name: &str) -> bool {
    name.strip_suffix(ARCHIVE_EXTENSION)
        .and_then(|rest| rest.strip_suffix('.'))
        .is_some()
}
