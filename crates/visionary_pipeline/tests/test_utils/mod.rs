//! Test utilities for orchestrator tests.

pub mod mock_service;

#[allow(unused_imports)]
pub use mock_service::{MockService, ServiceCall, canned_script};

use std::sync::Arc;
use visionary_core::{GenerationRequest, GenerationRequestBuilder, ReferenceImage};
use visionary_storage::{CredentialStore, InMemoryCredentialBackend};

/// A store holding a test key.
#[allow(dead_code)]
pub fn store_with_key() -> Arc<CredentialStore> {
    let store = CredentialStore::new(InMemoryCredentialBackend::default());
    store.set("test-api-key");
    Arc::new(store)
}

/// A store with no key.
#[allow(dead_code)]
pub fn empty_store() -> Arc<CredentialStore> {
    Arc::new(CredentialStore::new(InMemoryCredentialBackend::default()))
}

/// A small valid JPEG header.
#[allow(dead_code)]
pub fn jpeg() -> ReferenceImage {
    ReferenceImage::new("image/jpeg", vec![0xFF, 0xD8, 0xFF, 0xE0]).unwrap()
}

/// The standard scenario request: "future of work" as a Storyteller.
#[allow(dead_code)]
pub fn request(with_image: bool) -> GenerationRequest {
    let mut builder = GenerationRequestBuilder::default();
    builder.topic("future of work").persona("Storyteller");
    if with_image {
        builder.reference_image(jpeg());
    }
    builder.build().unwrap()
}
