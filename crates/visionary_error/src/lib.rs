//! Error types for the Visionary pipeline.
//!
//! # Error Hierarchy
//!
//! Every concern follows the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum names the specific condition
//! - `*Error` struct wraps the kind with source location tracking
//! - Constructors use `#[track_caller]` for automatic location capture
//!
//! The wrappers fold into [`VisionaryError`] through `?`.
//!
//! # Examples
//!
//! ```
//! use visionary_error::{GenerationError, GenerationErrorKind, VisionaryResult};
//!
//! fn call_service() -> VisionaryResult<String> {
//!     Err(GenerationError::new(GenerationErrorKind::MissingCredential))?
//! }
//!
//! assert!(call_service().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod bundle;
mod config;
mod error;
mod generation;
mod json;
mod storage;
mod validation;

pub use bundle::{BundleError, BundleErrorKind, BundleResult};
pub use config::ConfigError;
pub use error::{VisionaryError, VisionaryErrorKind, VisionaryResult};
pub use generation::{GenerationError, GenerationErrorKind, GenerationResult};
pub use json::JsonError;
pub use storage::{StorageError, StorageErrorKind};
pub use validation::{ValidationError, ValidationErrorKind};
