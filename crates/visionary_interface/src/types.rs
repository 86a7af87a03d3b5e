//! Request and response records exchanged across the boundary traits.

use serde::{Deserialize, Serialize};
use visionary_core::{ImageCallShape, QualityTier, ReferenceImage};

/// A single text-model call.
///
/// When `response_schema` is set the service is asked for JSON matching it.
#[derive(Debug, Clone, PartialEq, derive_builder::Builder, derive_getters::Getters)]
#[builder(setter(into))]
pub struct TextRequest {
    /// Model identifier
    model: String,
    /// Prompt text
    prompt: String,
    /// Image sent alongside the prompt
    #[builder(default, setter(strip_option))]
    image: Option<ReferenceImage>,
    /// JSON schema constraining the response
    #[builder(default, setter(strip_option))]
    response_schema: Option<serde_json::Value>,
}

/// A single image-model call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ImageRequest {
    /// Model identifier
    model: String,
    /// Prompt text
    prompt: String,
    /// Which call the model needs
    shape: ImageCallShape,
}

impl ImageRequest {
    /// Create an image request.
    pub fn new(model: impl Into<String>, prompt: impl Into<String>, shape: ImageCallShape) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            shape,
        }
    }
}

/// Image bytes returned by a backend.
#[derive(Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct GeneratedImage {
    /// MIME type reported by the service
    mime: String,
    /// Decoded bytes
    data: Vec<u8>,
}

impl GeneratedImage {
    /// Wrap decoded bytes.
    pub fn new(mime: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            mime: mime.into(),
            data,
        }
    }

    /// Take the bytes.
    pub fn into_parts(self) -> (String, Vec<u8>) {
        (self.mime, self.data)
    }
}

impl std::fmt::Debug for GeneratedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratedImage")
            .field("mime", &self.mime)
            .field("bytes", &self.data.len())
            .finish()
    }
}

/// Inputs for rendering one storyboard frame.
///
/// # Examples
///
/// ```
/// use visionary_interface::StoryboardPromptBuilder;
///
/// let prompt = StoryboardPromptBuilder::default()
///     .scene_index(1usize)
///     .visual_prompt("farmer checking a tablet in a maize field")
///     .topic("AI in agriculture")
///     .build()
///     .unwrap();
/// assert!(prompt.identity_description().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_builder::Builder, derive_getters::Getters)]
#[builder(setter(into))]
pub struct StoryboardPrompt {
    /// Zero-based scene index
    scene_index: usize,
    /// The scene's visual prompt from the script
    visual_prompt: String,
    /// Identity lock description, empty when no photo was given
    #[builder(default)]
    identity_description: String,
    /// Style descriptor shared by every frame
    #[builder(default, setter(strip_option))]
    global_visual_style: Option<String>,
    /// Persona name
    #[builder(default, setter(strip_option))]
    persona: Option<String>,
    /// Video topic
    topic: String,
    /// Prop titles to feature
    #[builder(default)]
    prop_titles: Vec<String>,
    /// Image tier
    #[builder(default)]
    quality: QualityTier,
}

/// Inputs for the music phase.
#[derive(Debug, Clone, PartialEq, Eq, derive_builder::Builder, derive_getters::Getters)]
#[builder(setter(into))]
pub struct MusicPrompt {
    /// Persona name
    #[builder(default, setter(strip_option))]
    persona: Option<String>,
    /// Requested mood
    mood: String,
    /// Requested genre
    genre: String,
    /// Video topic
    topic: String,
    /// Emotional direction, seeded from the opening line
    #[builder(default)]
    emotional_direction: String,
}
