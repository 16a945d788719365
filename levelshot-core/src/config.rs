//! Per-map and per-run outcome records.

use std::fmt;
use std::path::PathBuf;

use crate::extract::LevelshotFailure;

/// Outcome of extracting the levelshots of one map.
#[derive(Debug, Default)]
pub struct MapOutcome {
    /// Output files written for this map, in candidate order.
    pub written: Vec<PathBuf>,

    /// Candidates that existed but could not be converted.
    pub failures: Vec<LevelshotFailure>,
}

impl MapOutcome {
    /// Returns `true` if neither candidate existed in the archive.
    pub fn is_empty(&self) -> bool {
        self.written.is_empty() && self.failures.is_empty()
    }
}

/// Aggregated counters for a whole extraction run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractReport {
    /// Archives opened and scanned.
    pub archives_scanned: u64,

    /// Archives that could not be opened.
    pub archives_failed: u64,

    /// Map identifiers found, duplicates included.
    pub maps_found: u64,

    /// Levelshots converted and written.
    pub levelshots_written: u64,

    /// Levelshots that existed but failed to convert or write.
    pub levelshots_failed: u64,
}

impl ExtractReport {
    /// Folds one map's outcome into the run totals.
    pub fn record_map(&mut self, outcome: &MapOutcome) {
        self.maps_found += 1;
        self.levelshots_written += outcome.written.len() as u64;
        self.levelshots_failed += outcome.failures.len() as u64;
    }

    /// Returns `true` if every archive opened and every levelshot converted.
    pub fn is_clean(&self) -> bool {
        self.archives_failed == 0 && self.levelshots_failed == 0
    }
}

impl fmt::Display for ExtractReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} archives ({} unreadable), {} maps, {} levelshots written, {} failed",
            self.archives_scanned,
            self.archives_failed,
            self.maps_found,
            self.levelshots_written,
            self.levelshots_failed
        )
    }
}
