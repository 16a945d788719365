//! Discovery of maps inside an archive.

use crate::archive::ReadableArchive;
use crate::naming::{map_id_from_entry, MapId};

/// Returns the identifier of every map descriptor in `archive`.
///
/// Identifiers come out in archive entry order. Two descriptors sharing a map
/// segment produce the identifier twice.
pub fn scan_maps(archive: &impl ReadableArchive) -> Vec<MapId> {
    let maps: Vec<MapId> = archive
        .entry_names()
        .iter()
        .filter_map(|name| map_id_from_entry(name))
        .collect();

    tracing::debug!(count = maps.len(), "scanned archive for maps");
    maps
}
