//! # levelshot-core
//!
//! Scanning of game-asset archives for map levelshots and conversion of those
//! levelshots from TGA to JPEG.
//!
//! The crate is organised around two small seams: [`ReadableArchive`] for
//! anything that can list and read named entries, and [`Transcoder`] for
//! anything that can turn a legacy image into the output format. The scanner
//! and extractor are written against those traits only.

pub mod archive;
pub mod config;
pub mod error;
pub mod extract;
pub mod naming;
pub mod scan;
pub mod transcode;

pub use archive::{open_pk3, Pk3Archive, ReadableArchive, ZipArchiveReader};
pub use config::{ExtractReport, MapOutcome};
pub use error::{Error, Result};
pub use extract::{extract_levelshots, LevelshotFailure};
pub use naming::MapId;
pub use scan::scan_maps;
pub use transcode::{TgaToJpeg, Transcoder, JPEG_QUALITY};
