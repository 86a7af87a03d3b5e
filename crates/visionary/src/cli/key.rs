//! API key management.

use super::commands::KeyCommands;
use std::sync::Arc;
use visionary::VisionaryConfig;
use visionary_error::{ValidationError, ValidationErrorKind, VisionaryResult};
use visionary_storage::{CredentialStore, FileCredentialBackend};

/// Environment variable read by `key set` when no key is given.
const KEY_ENV_VAR: &str = "GEMINI_API_KEY";

/// Open the credential store in the configured scope directory.
///
/// # Errors
///
/// Returns a storage error if the scope directory cannot be created.
pub fn open_store(config: &VisionaryConfig) -> VisionaryResult<Arc<CredentialStore>> {
    let backend = match &config.storage.scope_dir {
        Some(dir) => FileCredentialBackend::new(dir)?,
        None => FileCredentialBackend::in_config_dir()?,
    };
    tracing::debug!(path = %backend.path().display(), "Using credential file");
    Ok(Arc::new(CredentialStore::new(backend)))
}

/// Handle `visionary key ...`.
pub fn handle_key_command(command: KeyCommands, config: &VisionaryConfig) -> VisionaryResult<()> {
    let store = open_store(config)?;

    match command {
        KeyCommands::Set { key } => {
            let key = match key {
                Some(key) => key,
                None => {
                    let _ = dotenvy::dotenv();
                    std::env::var(KEY_ENV_VAR).unwrap_or_default()
                }
            };
            store.set(&key);
            match store.get() {
                Some(credential) if credential.expose() == key.trim() => {
                    println!("API key saved ({})", credential.preview());
                }
                _ => {
                    return Err(ValidationError::new(ValidationErrorKind::InvalidRequest(
                        format!("API key is empty; pass it or set {}", KEY_ENV_VAR),
                    ))
                    .into());
                }
            }
        }
        KeyCommands::Clear => {
            store.clear();
            println!("API key removed");
        }
        KeyCommands::Status => match store.get() {
            Some(credential) => println!("API key configured ({})", credential.preview()),
            None => println!("No API key configured. Run `visionary key set <KEY>`."),
        },
    }

    Ok(())
}
