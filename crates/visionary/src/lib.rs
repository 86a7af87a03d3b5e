//! Visionary - storyboard generation for short vertical videos
//!
//! Visionary takes a topic, an optional creative persona and an optional
//! selfie, and produces a three-scene script, one 9:16 storyboard frame per
//! scene and a soundtrack brief, all through Google's generative APIs.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use visionary::{
//!     CredentialStore, FileCredentialBackend, GeminiBackend, GenerationClient,
//!     GenerationRequestBuilder, PipelineOrchestrator,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(CredentialStore::new(FileCredentialBackend::in_config_dir()?));
//!     let client = GenerationClient::new(GeminiBackend::new(), store.clone());
//!     let mut orchestrator = PipelineOrchestrator::new(client, store);
//!
//!     let request = GenerationRequestBuilder::default()
//!         .topic("AI in African agriculture")
//!         .persona("Storyteller")
//!         .build()?;
//!
//!     orchestrator.generate(request).await;
//!     println!("{:?}", orchestrator.snapshot().script());
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;

pub use config::{ExportConfig, PipelineConfig, StorageConfig, VisionaryConfig};

// Error types
pub use visionary_error::{
    BundleError, BundleErrorKind, ConfigError, GenerationError, GenerationErrorKind, JsonError,
    StorageError, StorageErrorKind, ValidationError, ValidationErrorKind, VisionaryError,
    VisionaryErrorKind, VisionaryResult,
};

// Core data types
pub use visionary_core::{
    GenerationRequest, GenerationRequestBuilder, ImageModel, MusicSpec, PersonaPreset, PropImage,
    QualityTier, ReferenceImage, RunState, SCENE_COUNT, Scene, ScriptResult, StoryboardImage,
    TOTAL_STEPS, persona_preset, registry,
};

// Service seams
pub use visionary_interface::{GenerationService, GenerativeBackend};

// Credential storage
pub use visionary_storage::{
    Credential, CredentialBackend, CredentialStore, FileCredentialBackend,
    InMemoryCredentialBackend,
};

// Generation client
pub use visionary_models::{GeminiBackend, GenerationClient, GenerationMetrics};

// Orchestration
pub use visionary_pipeline::{GENERIC_FAILURE_MESSAGE, PipelineOrchestrator, PipelineSnapshot};

// Export
pub use visionary_bundle::{
    Bundle, BundleMetadata, export_music, export_script, export_storyboard, write_to_dir,
};
