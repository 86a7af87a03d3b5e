//! Boundary traits.

use crate::{GeneratedImage, ImageRequest, MusicPrompt, StoryboardPrompt, TextRequest};
use async_trait::async_trait;
use visionary_core::{MusicSpec, ReferenceImage, ScriptResult, StoryboardImage};
use visionary_error::GenerationResult;
use visionary_storage::Credential;

/// Wire-level access to a hosted generative service.
///
/// One call is one request. Implementations never retry.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// Generate text, optionally with an image input and a response schema.
    async fn generate_text(
        &self,
        credential: &Credential,
        request: &TextRequest,
    ) -> GenerationResult<String>;

    /// Generate a single image.
    async fn generate_image(
        &self,
        credential: &Credential,
        request: &ImageRequest,
    ) -> GenerationResult<GeneratedImage>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;
}

/// The four typed operations the pipeline sequences.
///
/// Every operation is a single awaited call and fails with an auth error
/// before any request when no credential is configured.
#[async_trait]
pub trait GenerationService: Send + Sync {
    /// Describe the person in the reference photo for the identity lock.
    async fn describe_identity(&self, image: &ReferenceImage) -> GenerationResult<String>;

    /// Write the three-beat script.
    async fn generate_script(
        &self,
        topic: &str,
        persona: Option<&str>,
    ) -> GenerationResult<ScriptResult>;

    /// Render one storyboard frame.
    async fn generate_storyboard_image(
        &self,
        prompt: &StoryboardPrompt,
    ) -> GenerationResult<StoryboardImage>;

    /// Produce the soundtrack specification.
    async fn generate_music_prompt(&self, prompt: &MusicPrompt) -> GenerationResult<MusicSpec>;
}
