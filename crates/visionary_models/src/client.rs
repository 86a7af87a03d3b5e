//! Typed generation operations over a backend.

use crate::metrics::{GenerationMetrics, classify_error};
use crate::{prompt, schema};
use async_trait::async_trait;
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, instrument};
use visionary_core::{MusicSpec, ReferenceImage, SCRIPT_MODEL, ScriptResult, StoryboardImage};
use visionary_error::{GenerationError, GenerationErrorKind, GenerationResult};
use visionary_interface::{
    GenerationService, GenerativeBackend, ImageRequest, MusicPrompt, StoryboardPrompt,
    TextRequestBuilder,
};
use visionary_storage::{Credential, CredentialStore};

/// Generation client.
///
/// Reads the credential store on every call and fails with
/// [`GenerationErrorKind::MissingCredential`] before any request when no key
/// is configured. Failures are returned immediately, never retried.
pub struct GenerationClient<B> {
    backend: B,
    credentials: Arc<CredentialStore>,
    metrics: GenerationMetrics,
}

impl<B: GenerativeBackend> GenerationClient<B> {
    /// Create a client over a backend and a shared credential store.
    pub fn new(backend: B, credentials: Arc<CredentialStore>) -> Self {
        Self {
            backend,
            credentials,
            metrics: GenerationMetrics::default(),
        }
    }

    /// The wrapped backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[track_caller]
    fn credential(&self) -> GenerationResult<Credential> {
        self.credentials
            .get()
            .ok_or_else(|| GenerationError::new(GenerationErrorKind::MissingCredential))
    }

    async fn observe<T, F>(&self, operation: &'static str, model: &str, call: F) -> GenerationResult<T>
    where
        F: Future<Output = GenerationResult<T>> + Send,
    {
        let start = Instant::now();
        let result = call.await;
        self.metrics
            .record_request(operation, model, start.elapsed().as_secs_f64());

        if let Err(e) = &result {
            self.metrics
                .record_error(operation, model, classify_error(&e.kind));
            debug!(operation, model, error = %e, "Generation call failed");
        }
        result
    }

    async fn text(
        &self,
        operation: &'static str,
        prompt: String,
        image: Option<&ReferenceImage>,
        response_schema: Option<serde_json::Value>,
    ) -> GenerationResult<String> {
        let credential = self.credential()?;

        let mut builder = TextRequestBuilder::default();
        builder.model(SCRIPT_MODEL).prompt(prompt);
        if let Some(image) = image {
            builder.image(image.clone());
        }
        if let Some(schema) = response_schema {
            builder.response_schema(schema);
        }
        let request = builder
            .build()
            .map_err(|e| GenerationError::new(GenerationErrorKind::Request(e.to_string())))?;

        self.observe(
            operation,
            SCRIPT_MODEL,
            self.backend.generate_text(&credential, &request),
        )
        .await
    }
}

#[async_trait]
impl<B: GenerativeBackend> GenerationService for GenerationClient<B> {
    #[instrument(skip(self, image), fields(mime = %image.mime(), bytes = image.data().len()))]
    async fn describe_identity(&self, image: &ReferenceImage) -> GenerationResult<String> {
        let description = self
            .text(
                "describe_identity",
                prompt::IDENTITY_PROMPT.to_string(),
                Some(image),
                None,
            )
            .await?;
        Ok(description.trim().to_string())
    }

    #[instrument(skip(self))]
    async fn generate_script(
        &self,
        topic: &str,
        persona: Option<&str>,
    ) -> GenerationResult<ScriptResult> {
        let text = self
            .text(
                "generate_script",
                prompt::script_prompt(topic, persona),
                None,
                Some(schema::script_schema()),
            )
            .await?;
        schema::decode_script(&text)
    }

    #[instrument(skip(self, prompt), fields(scene = prompt.scene_index(), quality = %prompt.quality()))]
    async fn generate_storyboard_image(
        &self,
        prompt: &StoryboardPrompt,
    ) -> GenerationResult<StoryboardImage> {
        let credential = self.credential()?;
        let model = prompt.quality().model();
        let request = ImageRequest::new(
            model.id,
            prompt::storyboard_prompt(prompt),
            model.call_shape(),
        );

        let image = self
            .observe(
                "generate_storyboard_image",
                model.id,
                self.backend.generate_image(&credential, &request),
            )
            .await?;

        let (mime, data) = image.into_parts();
        if data.is_empty() {
            return Err(GenerationError::new(GenerationErrorKind::EmptyResponse(
                "image payload is empty".to_string(),
            )));
        }
        Ok(StoryboardImage::new(*prompt.scene_index(), mime, data))
    }

    #[instrument(skip(self, prompt), fields(mood = %prompt.mood(), genre = %prompt.genre()))]
    async fn generate_music_prompt(&self, prompt: &MusicPrompt) -> GenerationResult<MusicSpec> {
        let text = self
            .text(
                "generate_music_prompt",
                prompt::music_prompt(prompt),
                None,
                Some(schema::music_schema()),
            )
            .await?;
        schema::decode_music(&text)
    }
}
