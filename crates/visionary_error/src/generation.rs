//! Errors raised by the generation client and its backends.

/// Generation error conditions.
///
/// `MissingCredential` is the auth failure raised before any request is
/// issued. Every other kind is an upstream failure: fatal to the current run
/// and never retried.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GenerationErrorKind {
    /// No credential configured
    #[display("API key is not set. Please configure your Google AI API key.")]
    MissingCredential,
    /// Non-success HTTP status from the service
    #[display("HTTP {} error: {}", status_code, message)]
    HttpStatus {
        /// HTTP status code
        status_code: u16,
        /// Response body or reason
        message: String,
    },
    /// Transport-level failure before a response arrived
    #[display("Request failed: {}", _0)]
    Request(String),
    /// Response did not match the declared schema
    #[display("Malformed response: {}", _0)]
    MalformedResponse(String),
    /// Inline image payload was not valid base64
    #[display("Base64 decode error: {}", _0)]
    Base64Decode(String),
    /// Response carried no usable content
    #[display("Empty response: {}", _0)]
    EmptyResponse(String),
}

impl GenerationErrorKind {
    /// True for credential problems, either missing locally or rejected upstream.
    pub fn is_auth(&self) -> bool {
        match self {
            GenerationErrorKind::MissingCredential => true,
            GenerationErrorKind::HttpStatus { status_code, .. } => {
                matches!(*status_code, 401 | 403)
            }
            _ => false,
        }
    }

    /// True when the failure came from the external service.
    pub fn is_upstream(&self) -> bool {
        !matches!(self, GenerationErrorKind::MissingCredential)
    }
}

/// Generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use visionary_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::HttpStatus {
///     status_code: 503,
///     message: "overloaded".to_string(),
/// });
/// assert!(err.kind.is_upstream());
/// assert!(!err.kind.is_auth());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The kind of error that occurred
    pub kind: GenerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for a schema violation.
    #[track_caller]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(GenerationErrorKind::MalformedResponse(message.into()))
    }
}

/// Result type for generation operations.
pub type GenerationResult<T> = Result<T, GenerationError>;
