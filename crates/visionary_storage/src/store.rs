//! The credential store.

use crate::{Credential, CredentialBackend};
use tokio::sync::watch;

/// Name of the single entry holding the API key.
pub const CREDENTIAL_ENTRY: &str = "google_ai_api_key";

/// Holds at most one API key.
///
/// Reads are served from an in-memory mirror. Writes update the mirror and
/// then persist; a persistence failure is logged and the mirror keeps the new
/// value, so `set`/`clear` never fail.
pub struct CredentialStore {
    backend: Box<dyn CredentialBackend>,
    mirror: watch::Sender<Option<Credential>>,
}

impl CredentialStore {
    /// Create a store, loading any previously persisted key.
    #[tracing::instrument(skip(backend), fields(backend = backend.backend_name()))]
    pub fn new(backend: impl CredentialBackend + 'static) -> Self {
        let initial = match backend.load(CREDENTIAL_ENTRY) {
            Ok(value) => value
                .map(|secret| secret.trim().to_string())
                .filter(|secret| !secret.is_empty())
                .map(Credential::new),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load persisted credential");
                None
            }
        };
        tracing::debug!(present = initial.is_some(), "Credential store ready");

        let (mirror, _) = watch::channel(initial);
        Self {
            backend: Box::new(backend),
            mirror,
        }
    }

    /// Current key, if any.
    pub fn get(&self) -> Option<Credential> {
        self.mirror.borrow().clone()
    }

    /// Whether a key is present.
    pub fn has(&self) -> bool {
        self.mirror.borrow().is_some()
    }

    /// Store a key. Surrounding whitespace is trimmed; empty or
    /// whitespace-only input leaves the store untouched.
    #[tracing::instrument(skip_all)]
    pub fn set(&self, secret: &str) {
        let secret = secret.trim();
        if secret.is_empty() {
            tracing::debug!("Ignoring empty credential");
            return;
        }

        let credential = Credential::new(secret);
        tracing::info!(key = %credential, "Credential updated");
        self.mirror.send_replace(Some(credential));

        if let Err(e) = self.backend.store(CREDENTIAL_ENTRY, secret) {
            tracing::warn!(error = %e, "Failed to persist credential");
        }
    }

    /// Remove the key.
    #[tracing::instrument(skip_all)]
    pub fn clear(&self) {
        self.mirror.send_replace(None);
        tracing::info!("Credential cleared");

        if let Err(e) = self.backend.remove(CREDENTIAL_ENTRY) {
            tracing::warn!(error = %e, "Failed to remove persisted credential");
        }
    }

    /// Observe key changes.
    pub fn subscribe(&self) -> watch::Receiver<Option<Credential>> {
        self.mirror.subscribe()
    }
}

impl std::fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialStore")
            .field("backend", &self.backend.backend_name())
            .field("credential", &*self.mirror.borrow())
            .finish()
    }
}
