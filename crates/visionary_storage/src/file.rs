//! JSON scope file backend.

use crate::CredentialBackend;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use visionary_error::{StorageError, StorageErrorKind};

const SCOPE_FILE: &str = "credentials.json";

/// Backend storing entries as a flat JSON object in
/// `{scope_dir}/credentials.json`.
///
/// Writes go to a temp file which is then renamed over the scope file. On
/// Unix the file is readable by its owner only.
#[derive(Debug, Clone)]
pub struct FileCredentialBackend {
    path: PathBuf,
}

impl FileCredentialBackend {
    /// Open a scope in the given directory, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    #[tracing::instrument(skip(scope_dir))]
    pub fn new(scope_dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let scope_dir = scope_dir.into();
        std::fs::create_dir_all(&scope_dir).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                scope_dir.display(),
                e
            )))
        })?;

        let path = scope_dir.join(SCOPE_FILE);
        tracing::debug!(path = %path.display(), "Opened credential scope");
        Ok(Self { path })
    }

    /// Open the scope under the platform config directory
    /// (`~/.config/visionary` on Linux).
    ///
    /// # Errors
    ///
    /// Returns an error if no config directory exists on this platform or it
    /// cannot be created.
    pub fn in_config_dir() -> Result<Self, StorageError> {
        let dir = dirs::config_dir().ok_or_else(|| {
            StorageError::new(StorageErrorKind::Unavailable(
                "no platform config directory".to_string(),
            ))
        })?;
        Self::new(dir.join("visionary"))
    }

    /// Path of the scope file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_scope(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                ))));
            }
        };

        serde_json::from_slice(&bytes).map_err(|e| {
            StorageError::new(StorageErrorKind::Corrupt(format!(
                "{}: {}",
                self.path.display(),
                e
            )))
        })
    }

    fn write_scope(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let json = serde_json::to_vec_pretty(entries)
            .map_err(|e| StorageError::new(StorageErrorKind::FileWrite(e.to_string())))?;

        let temp_path = self.path.with_extension("tmp");
        std::fs::write(&temp_path, json).map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&temp_path, std::fs::Permissions::from_mode(0o600)).map_err(
                |e| {
                    StorageError::new(StorageErrorKind::FileWrite(format!(
                        "chmod {}: {}",
                        temp_path.display(),
                        e
                    )))
                },
            )?;
        }

        std::fs::rename(&temp_path, &self.path).map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                self.path.display(),
                e
            )))
        })
    }
}

impl CredentialBackend for FileCredentialBackend {
    fn load(&self, entry: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_scope()?.remove(entry))
    }

    fn store(&self, entry: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.read_scope()?;
        entries.insert(entry.to_string(), value.to_string());
        self.write_scope(&entries)
    }

    fn remove(&self, entry: &str) -> Result<(), StorageError> {
        let mut entries = self.read_scope()?;
        if entries.remove(entry).is_none() {
            return Ok(());
        }
        self.write_scope(&entries)
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}
