//! Top-level error wrapper types.

use crate::{
    BundleError, ConfigError, GenerationError, JsonError, StorageError, ValidationError,
};

/// Every error the workspace can raise, one variant per concern.
///
/// # Examples
///
/// ```
/// use visionary_error::{ConfigError, VisionaryError};
///
/// let err: VisionaryError = ConfigError::new("missing output_dir").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum VisionaryErrorKind {
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Credential storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// Generation client error
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Front-end input validation error
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Bundle export error
    #[from(BundleError)]
    Bundle(BundleError),
}

/// Visionary error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Visionary Error: {}", _0)]
pub struct VisionaryError(Box<VisionaryErrorKind>);

impl VisionaryError {
    /// Create a new error from a kind.
    pub fn new(kind: VisionaryErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &VisionaryErrorKind {
        &self.0
    }

    /// The generation failure behind this error, if any.
    pub fn as_generation(&self) -> Option<&GenerationError> {
        match self.kind() {
            VisionaryErrorKind::Generation(err) => Some(err),
            _ => None,
        }
    }
}

// Generic From implementation for any type that converts to VisionaryErrorKind
impl<T> From<T> for VisionaryError
where
    T: Into<VisionaryErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Visionary operations.
pub type VisionaryResult<T> = std::result::Result<T, VisionaryError>;
