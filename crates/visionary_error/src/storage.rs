//! Storage error types.

/// Kinds of credential storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StorageErrorKind {
    /// Failed to create the scope directory
    #[display("Failed to create scope directory: {}", _0)]
    DirectoryCreation(String),
    /// Failed to write the scope file
    #[display("Failed to write file: {}", _0)]
    FileWrite(String),
    /// Failed to read the scope file
    #[display("Failed to read file: {}", _0)]
    FileRead(String),
    /// Scope file exists but cannot be parsed
    #[display("Corrupt scope file: {}", _0)]
    Corrupt(String),
    /// No platform directory could be resolved for the scope
    #[display("Storage unavailable: {}", _0)]
    Unavailable(String),
}

/// Storage error with location tracking.
///
/// # Examples
///
/// ```
/// use visionary_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::FileRead("/tmp/scope.json".to_string()));
/// assert!(format!("{}", err).contains("Failed to read"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The kind of error that occurred
    pub kind: StorageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StorageError {
    /// Create a new storage error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
