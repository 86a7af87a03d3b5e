//! Core data types for the Visionary storyboard pipeline.
//!
//! This crate holds the records that flow between the generation client, the
//! pipeline orchestrator and the bundle assembler, plus the static lookup
//! tables (personas, image quality tiers, music lists).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod media;
mod music;
pub mod registry;
mod request;
mod script;
mod state;

pub use media::{PropImage, ReferenceImage, StoryboardImage, extension_for_mime, mime_for_path};
pub use music::{BpmRange, MUSIC_DURATION_SECONDS, MusicSpec, MusicStructure};
pub use registry::{
    ImageCallShape, ImageModel, MusicDefaults, PersonaPreset, QualityTier, SCRIPT_MODEL,
    persona_preset,
};
pub use request::{GenerationRequest, GenerationRequestBuilder, GenerationRequestBuilderError};
pub use script::{SCENE_COUNT, Scene, ScriptResult};
pub use state::{RunState, TOTAL_STEPS};
