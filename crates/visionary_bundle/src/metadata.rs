//! Run metadata stored alongside the artifacts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Version of the bundle layout.
pub const BUNDLE_SCHEMA_VERSION: &str = "1.0";

/// Who, what and how a bundle was generated.
///
/// Serialized as camelCase JSON into `metadata.json`.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_builder::Builder,
    derive_getters::Getters,
)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct BundleMetadata {
    /// When the run finished
    #[builder(default = "Utc::now()")]
    timestamp: DateTime<Utc>,
    /// Persona used, if any
    #[builder(default)]
    persona: Option<String>,
    /// Video topic
    topic: String,
    /// Soundtrack genre
    music_genre: String,
    /// Soundtrack mood
    music_mood: String,
    /// Image model identifier
    image_model: String,
    /// Script model identifier
    script_model: String,
    /// Bundle layout version
    #[builder(default = "BUNDLE_SCHEMA_VERSION.to_string()")]
    version: String,
    /// Number of prop images
    #[builder(default)]
    prop_count: usize,
}
