//! Failures loading `visionary.toml`.

/// A configuration layer could not be read or did not match the expected
/// tables (`[pipeline]`, `[export]`, `[storage]`).
///
/// # Examples
///
/// ```
/// use visionary_error::ConfigError;
///
/// let err = ConfigError::new("unknown quality tier 'ultra'");
/// assert!(err.to_string().starts_with("Configuration Error: unknown quality tier"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// What went wrong, including the offending layer where known
    pub message: String,
    /// Line number where the error was raised
    pub line: u32,
    /// File where the error was raised
    pub file: &'static str,
}

impl ConfigError {
    /// Report a configuration failure at the caller's location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
