//! Test utilities for generation client tests.

pub mod mock_backend;

#[allow(unused_imports)]
pub use mock_backend::{MockBackend, MockResponse, RecordedCall};

use std::sync::Arc;
use visionary_storage::{CredentialStore, InMemoryCredentialBackend};

/// A store holding a test key.
#[allow(dead_code)]
pub fn store_with_key() -> Arc<CredentialStore> {
    let store = CredentialStore::new(InMemoryCredentialBackend::default());
    store.set("test-api-key-1234");
    Arc::new(store)
}

/// A store with no key.
#[allow(dead_code)]
pub fn empty_store() -> Arc<CredentialStore> {
    Arc::new(CredentialStore::new(InMemoryCredentialBackend::default()))
}

/// A well-formed script response.
#[allow(dead_code)]
pub const SCRIPT_JSON: &str = r#"{"scenes":[
    {"beat":"The Hook","script":"Work is changing fast.","visual_prompt":"city at dawn"},
    {"beat":"The Flow","script":"Adapt or fade.","visual_prompt":"hands sketching plans"},
    {"beat":"The Punchline","script":"Start now.","visual_prompt":"runner at a starting line"}
]}"#;

/// A well-formed music response.
#[allow(dead_code)]
pub const MUSIC_JSON: &str = r#"{"prompt":"Warm ambient pads","genre":"Ambient","mood":"Calm",
    "durationSeconds":24,"bpmRange":{"min":70,"max":80},"intensity":2,
    "structure":{"intro":6,"build":6,"drop":6,"outro":6},"keywords":["pads","warm"]}"#;
