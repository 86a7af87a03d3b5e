//! Bundle assembly and export for Visionary.
//!
//! A [`Bundle`] is an independent copy of a run's artifacts. It exports as a
//! single ZIP archive or as individual artifacts. Archives are deterministic:
//! entry order, names and timestamps are fixed, so exporting the same bundle
//! twice yields identical bytes.
//!
//! Insufficient data is not an error: [`assemble`] and the partial exports
//! return `None`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod archive;
mod bundle;
mod export;
mod metadata;

pub use archive::DeterministicArchive;
pub use bundle::{Bundle, assemble};
pub use export::{
    ARCHIVE_FILE, MUSIC_FILE, SCRIPT_FILE, STORYBOARD_FILE, ScriptExport, export_music,
    export_script, export_storyboard, write_to_dir,
};
pub use metadata::{BUNDLE_SCHEMA_VERSION, BundleMetadata, BundleMetadataBuilder};
