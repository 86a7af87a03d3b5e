//! Deterministic ZIP writer.

use std::io::{Cursor, Write};
use visionary_error::{BundleError, BundleErrorKind, BundleResult};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

/// In-memory ZIP archive with fixed entry metadata.
///
/// Every entry is deflated with the same options and stamped with the ZIP
/// epoch, so the output depends only on the entries and their order.
///
/// # Examples
///
/// ```
/// use visionary_bundle::DeterministicArchive;
///
/// let build = || {
///     let mut archive = DeterministicArchive::new();
///     archive.add("a.txt", b"hello").unwrap();
///     archive.finish().unwrap()
/// };
/// assert_eq!(build(), build());
/// ```
pub struct DeterministicArchive {
    writer: ZipWriter<Cursor<Vec<u8>>>,
    options: SimpleFileOptions,
}

impl Default for DeterministicArchive {
    fn default() -> Self {
        Self::new()
    }
}

impl DeterministicArchive {
    /// Start an empty archive.
    pub fn new() -> Self {
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(DateTime::default())
            .unix_permissions(0o644);
        Self {
            writer: ZipWriter::new(Cursor::new(Vec::new())),
            options,
        }
    }

    /// Append an entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry cannot be written.
    pub fn add(&mut self, name: &str, data: &[u8]) -> BundleResult<()> {
        self.writer
            .start_file(name, self.options)
            .map_err(|e| archive_error(name, e))?;
        self.writer
            .write_all(data)
            .map_err(|e| archive_error(name, e))
    }

    /// Finish the archive and return its bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the central directory cannot be written.
    pub fn finish(self) -> BundleResult<Vec<u8>> {
        let cursor = self
            .writer
            .finish()
            .map_err(|e| archive_error("central directory", e))?;
        Ok(cursor.into_inner())
    }
}

fn archive_error(entry: &str, err: impl std::fmt::Display) -> BundleError {
    BundleError::new(BundleErrorKind::ArchiveWrite(format!("{}: {}", entry, err)))
}
