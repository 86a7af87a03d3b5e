//! Failures encoding an exported record as JSON.

/// A record (`script.json`, `metadata.json`, ...) that could not be encoded.
///
/// # Examples
///
/// ```
/// use visionary_error::JsonError;
///
/// let err = JsonError::new("music.json", "key must be a string");
/// assert_eq!(err.record, "music.json");
/// assert!(err.to_string().contains("music.json: key must be a string"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display, derive_more::Error)]
#[display("JSON Error: {}: {} at line {} in {}", record, message, line, file)]
pub struct JsonError {
    /// Name of the record being encoded
    pub record: String,
    /// Encoder message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl JsonError {
    /// Record an encoding failure for `record` at the caller's location.
    #[track_caller]
    pub fn new(record: impl Into<String>, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            record: record.into(),
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
