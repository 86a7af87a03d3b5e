//! The user's generation request.

use crate::registry::{QualityTier, persona_preset};
use crate::{PropImage, ReferenceImage};
use visionary_error::{ValidationError, ValidationErrorKind};

const FALLBACK_GENRE: &str = "Cinematic";
const FALLBACK_MOOD: &str = "Confident";

/// Everything needed to start one run.
///
/// The builder does not reject an empty topic: the orchestrator treats that
/// as a no-op rather than an error. Front-ends that want to report it check
/// [`GenerationRequest::validate`].
///
/// # Examples
///
/// ```
/// use visionary_core::{GenerationRequestBuilder, QualityTier};
///
/// let request = GenerationRequestBuilder::default()
///     .topic("AI in African agriculture")
///     .persona("Storyteller")
///     .image_quality(QualityTier::Fast)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.music_genre(), "Ambient");
/// assert_eq!(request.music_mood(), "Calm");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_builder::Builder, derive_getters::Getters)]
#[builder(setter(into))]
pub struct GenerationRequest {
    /// Subject of the video
    topic: String,
    /// Creative voice, if any
    #[builder(default, setter(strip_option))]
    persona: Option<String>,
    /// Photo for the identity lock, if any
    #[builder(default, setter(strip_option))]
    reference_image: Option<ReferenceImage>,
    /// Image model tier
    #[builder(default)]
    image_quality: QualityTier,
    /// Photos of props the storyboard should feature, in order
    #[builder(default)]
    props: Vec<PropImage>,
    /// Soundtrack mood; empty means the persona's default
    #[builder(default)]
    #[getter(skip)]
    music_mood: String,
    /// Soundtrack genre; empty means the persona's default
    #[builder(default)]
    #[getter(skip)]
    music_genre: String,
}

impl GenerationRequest {
    /// True when the topic has non-whitespace content.
    pub fn has_topic(&self) -> bool {
        !self.topic.trim().is_empty()
    }

    /// Report an unusable request as a validation error.
    #[track_caller]
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.has_topic() {
            Ok(())
        } else {
            Err(ValidationError::new(ValidationErrorKind::EmptyTopic))
        }
    }

    /// Music mood, falling back to the persona's default.
    pub fn music_mood(&self) -> &str {
        if !self.music_mood.trim().is_empty() {
            return &self.music_mood;
        }
        self.persona
            .as_deref()
            .and_then(persona_preset)
            .map(|preset| preset.music_defaults.mood)
            .unwrap_or(FALLBACK_MOOD)
    }

    /// Music genre, falling back to the persona's default.
    pub fn music_genre(&self) -> &str {
        if !self.music_genre.trim().is_empty() {
            return &self.music_genre;
        }
        self.persona
            .as_deref()
            .and_then(persona_preset)
            .map(|preset| preset.music_defaults.genre)
            .unwrap_or(FALLBACK_GENRE)
    }
}

impl From<GenerationRequestBuilderError> for ValidationError {
    #[track_caller]
    fn from(err: GenerationRequestBuilderError) -> Self {
        ValidationError::new(ValidationErrorKind::InvalidRequest(err.to_string()))
    }
}
