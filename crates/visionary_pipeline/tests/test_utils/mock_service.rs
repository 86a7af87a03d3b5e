//! Mock generation service for testing.

use async_trait::async_trait;
use std::sync::Mutex;
use tokio::sync::watch;
use visionary_core::{
    BpmRange, MusicSpec, MusicStructure, ReferenceImage, RunState, Scene, ScriptResult,
    StoryboardImage,
};
use visionary_error::{GenerationError, GenerationErrorKind, GenerationResult};
use visionary_interface::{GenerationService, MusicPrompt, StoryboardPrompt};
use visionary_pipeline::PipelineSnapshot;

/// One call received by the mock, with what the orchestrator had published
/// at that moment.
#[derive(Debug, Clone)]
pub enum ServiceCall {
    Identity {
        state: RunState,
    },
    Script {
        state: RunState,
        topic: String,
        persona: Option<String>,
    },
    Storyboard {
        state: RunState,
        prompt: StoryboardPrompt,
        published_images: usize,
    },
    Music {
        state: RunState,
        prompt: MusicPrompt,
    },
}

/// Service returning canned results, optionally failing one operation.
#[derive(Default)]
pub struct MockService {
    fail_on: Option<&'static str>,
    observer: Mutex<Option<watch::Receiver<PipelineSnapshot>>>,
    calls: Mutex<Vec<ServiceCall>>,
}

impl MockService {
    /// Service where every call succeeds.
    pub fn new_success() -> Self {
        Self::default()
    }

    /// Service that fails the named operation with an upstream error.
    ///
    /// Names: "identity", "script", "storyboard", "music".
    pub fn new_failing(operation: &'static str) -> Self {
        Self {
            fail_on: Some(operation),
            ..Self::default()
        }
    }

    /// Let the mock read published snapshots while it is being called.
    pub fn observe(&self, rx: watch::Receiver<PipelineSnapshot>) {
        *self.observer.lock().unwrap() = Some(rx);
    }

    /// Every call received, in order.
    pub fn calls(&self) -> Vec<ServiceCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of calls received.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn published(&self) -> PipelineSnapshot {
        self.observer
            .lock()
            .unwrap()
            .as_ref()
            .map(|rx| rx.borrow().clone())
            .unwrap_or_default()
    }

    fn check(&self, operation: &str) -> GenerationResult<()> {
        if self.fail_on == Some(operation) {
            return Err(GenerationError::new(GenerationErrorKind::HttpStatus {
                status_code: 500,
                message: format!("simulated {} failure", operation),
            }));
        }
        Ok(())
    }
}

/// The canned script.
pub fn canned_script() -> ScriptResult {
    ScriptResult::new(
        vec![
            Scene::new("The Hook", "Your job is about to change.", "empty office at dawn"),
            Scene::new("The Flow", "Skills outlive titles.", "hands learning a new tool"),
            Scene::new("The Punchline", "Start learning today.", "sunrise over a city"),
        ],
        Some("warm amber light".to_string()),
    )
}

#[async_trait]
impl GenerationService for MockService {
    async fn describe_identity(&self, _image: &ReferenceImage) -> GenerationResult<String> {
        let state = self.published().state().clone();
        self.calls.lock().unwrap().push(ServiceCall::Identity { state });
        self.check("identity")?;
        Ok("a person with short brown hair".to_string())
    }

    async fn generate_script(
        &self,
        topic: &str,
        persona: Option<&str>,
    ) -> GenerationResult<ScriptResult> {
        let state = self.published().state().clone();
        self.calls.lock().unwrap().push(ServiceCall::Script {
            state,
            topic: topic.to_string(),
            persona: persona.map(str::to_string),
        });
        self.check("script")?;
        Ok(canned_script())
    }

    async fn generate_storyboard_image(
        &self,
        prompt: &StoryboardPrompt,
    ) -> GenerationResult<StoryboardImage> {
        let published = self.published();
        self.calls.lock().unwrap().push(ServiceCall::Storyboard {
            state: published.state().clone(),
            prompt: prompt.clone(),
            published_images: published.images().len(),
        });
        self.check("storyboard")?;
        Ok(StoryboardImage::new(
            *prompt.scene_index(),
            "image/png",
            vec![*prompt.scene_index() as u8; 8],
        ))
    }

    async fn generate_music_prompt(&self, prompt: &MusicPrompt) -> GenerationResult<MusicSpec> {
        let state = self.published().state().clone();
        self.calls.lock().unwrap().push(ServiceCall::Music {
            state,
            prompt: prompt.clone(),
        });
        self.check("music")?;
        Ok(MusicSpec {
            prompt: "soft piano over warm pads".to_string(),
            genre: prompt.genre().clone(),
            mood: prompt.mood().clone(),
            duration_seconds: 24,
            bpm_range: BpmRange { min: 70, max: 85 },
            intensity: 2,
            structure: MusicStructure {
                intro: 4,
                build: 8,
                drop: 8,
                outro: 4,
            },
            keywords: vec!["piano".to_string(), "pads".to_string()],
        })
    }
}
