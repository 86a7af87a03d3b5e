//! Input validation errors raised at the front-end boundary.

/// Specific validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ValidationErrorKind {
    /// Topic is empty or whitespace
    #[display("Topic cannot be empty")]
    EmptyTopic,

    /// Uploaded file is not an image
    #[display("Invalid file type '{}'. Please upload an image.", _0)]
    NotAnImage(String),

    /// File could not be read from disk
    #[display("Unable to read file: {}", _0)]
    UnreadableFile(String),

    /// Prop argument was not in `TITLE=PATH` form
    #[display("Invalid prop '{}': expected TITLE=PATH", _0)]
    InvalidProp(String),

    /// Request builder was missing a required field
    #[display("Invalid request: {}", _0)]
    InvalidRequest(String),
}

/// Validation error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    kind: ValidationErrorKind,
    line: u32,
    file: &'static str,
}

impl ValidationError {
    /// Create a new validation error with caller location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ValidationErrorKind {
        &self.kind
    }
}

/// Convert from derive_builder error string.
impl From<String> for ValidationError {
    #[track_caller]
    fn from(msg: String) -> Self {
        Self::new(ValidationErrorKind::InvalidRequest(msg))
    }
}
