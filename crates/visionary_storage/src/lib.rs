//! Credential storage for Visionary.
//!
//! A single API key is kept in a named entry inside a scoped store. The
//! [`CredentialStore`] keeps an in-memory mirror as the source of truth for
//! reads and writes through to a [`CredentialBackend`].
//!
//! # Example
//!
//! ```
//! use visionary_storage::{CredentialStore, InMemoryCredentialBackend};
//!
//! let store = CredentialStore::new(InMemoryCredentialBackend::default());
//! assert!(!store.has());
//!
//! store.set("  AIzaSy-example-key  ");
//! assert_eq!(store.get().unwrap().expose(), "AIzaSy-example-key");
//!
//! store.clear();
//! assert!(store.get().is_none());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod credential;
mod file;
mod memory;
mod store;

pub use backend::CredentialBackend;
pub use credential::Credential;
pub use file::FileCredentialBackend;
pub use memory::InMemoryCredentialBackend;
pub use store::{CREDENTIAL_ENTRY, CredentialStore};
