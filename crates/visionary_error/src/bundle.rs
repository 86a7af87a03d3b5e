//! Bundle export errors.

use crate::JsonError;

/// Specific export failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum BundleErrorKind {
    /// Writing an archive entry failed
    #[display("Archive write failed: {}", _0)]
    ArchiveWrite(String),
    /// Serializing a structured record failed
    #[display("Serialization failed: {}", _0)]
    Serialization(JsonError),
    /// Writing an export to disk failed
    #[display("Export write failed: {}", _0)]
    FileWrite(String),
}

/// Bundle error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Bundle Error: {} at line {} in {}", kind, line, file)]
pub struct BundleError {
    /// The kind of error that occurred
    pub kind: BundleErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl BundleError {
    /// Create a new bundle error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: BundleErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for export operations.
pub type BundleResult<T> = Result<T, BundleError>;
