//! Process-local backend.

use crate::CredentialBackend;
use std::collections::BTreeMap;
use std::sync::Mutex;
use visionary_error::{StorageError, StorageErrorKind};

/// Backend that keeps entries in memory. Used in tests and when no config
/// directory is available.
#[derive(Debug, Default)]
pub struct InMemoryCredentialBackend {
    entries: Mutex<BTreeMap<String, String>>,
}

impl InMemoryCredentialBackend {
    fn with_entries<T>(
        &self,
        f: impl FnOnce(&mut BTreeMap<String, String>) -> T,
    ) -> Result<T, StorageError> {
        let mut entries = self.entries.lock().map_err(|e| {
            StorageError::new(StorageErrorKind::Unavailable(format!(
                "in-memory scope poisoned: {}",
                e
            )))
        })?;
        Ok(f(&mut entries))
    }
}

impl CredentialBackend for InMemoryCredentialBackend {
    fn load(&self, entry: &str) -> Result<Option<String>, StorageError> {
        self.with_entries(|entries| entries.get(entry).cloned())
    }

    fn store(&self, entry: &str, value: &str) -> Result<(), StorageError> {
        self.with_entries(|entries| {
            entries.insert(entry.to_string(), value.to_string());
        })
    }

    fn remove(&self, entry: &str) -> Result<(), StorageError> {
        self.with_entries(|entries| {
            entries.remove(entry);
        })
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
