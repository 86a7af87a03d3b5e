//! Durable backend trait.

use visionary_error::StorageError;

/// A scoped key/value store holding credential entries.
///
/// Implementations are synchronous: entries are tiny and the store sits
/// behind a synchronous surface.
pub trait CredentialBackend: Send + Sync {
    /// Read an entry, `None` when absent.
    fn load(&self, entry: &str) -> Result<Option<String>, StorageError>;

    /// Write an entry, replacing any previous value.
    fn store(&self, entry: &str, value: &str) -> Result<(), StorageError>;

    /// Delete an entry. Removing an absent entry succeeds.
    fn remove(&self, entry: &str) -> Result<(), StorageError>;

    /// Backend name for logs.
    fn backend_name(&self) -> &'static str;
}
