//! The run state machine.

use crate::PipelineSnapshot;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, error, info, instrument, warn};
use visionary_bundle::{Bundle, BundleMetadata, BundleMetadataBuilder, assemble};
use visionary_core::{GenerationRequest, RunState, SCENE_COUNT, SCRIPT_MODEL};
use visionary_error::{GenerationError, GenerationErrorKind, GenerationResult};
use visionary_interface::{GenerationService, MusicPromptBuilder, StoryboardPromptBuilder};
use visionary_storage::CredentialStore;

/// Message shown for every failed run. The cause goes to the log.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "An error occurred during generation. Please check the logs for details and try again.";

/// Drives one run at a time through the generation phases.
///
/// `generate` takes `&mut self` and only starts from `Idle`, so a second run
/// cannot start while one is active or before a reset.
pub struct PipelineOrchestrator<S> {
    service: S,
    credentials: Arc<CredentialStore>,
    snapshot: watch::Sender<PipelineSnapshot>,
    request: Option<GenerationRequest>,
    finished_at: Option<DateTime<Utc>>,
}

impl<S: GenerationService> PipelineOrchestrator<S> {
    /// Create an idle orchestrator.
    pub fn new(service: S, credentials: Arc<CredentialStore>) -> Self {
        let (snapshot, _) = watch::channel(PipelineSnapshot::default());
        Self {
            service,
            credentials,
            snapshot,
            request: None,
            finished_at: None,
        }
    }

    /// Observe every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<PipelineSnapshot> {
        self.snapshot.subscribe()
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> PipelineSnapshot {
        self.snapshot.borrow().clone()
    }

    /// Current state.
    pub fn state(&self) -> RunState {
        self.snapshot.borrow().state.clone()
    }

    /// The generation service.
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Run every phase for `request` and return the final state.
    ///
    /// This is a no-op returning the current state unless the orchestrator is
    /// idle, the topic is non-empty and a credential is configured. Failures
    /// are not returned: they move the run to `Failed` with
    /// [`GENERIC_FAILURE_MESSAGE`].
    #[instrument(skip(self, request), fields(topic = %request.topic(), persona = ?request.persona()))]
    pub async fn generate(&mut self, request: GenerationRequest) -> RunState {
        let current = self.state();
        if current != RunState::Idle {
            debug!(state = %current, "Run already in progress or awaiting reset");
            return current;
        }
        if !request.has_topic() {
            debug!("Empty topic, not starting");
            return current;
        }
        if !self.credentials.has() {
            debug!("No credential configured, not starting");
            return current;
        }

        info!(
            quality = %request.image_quality(),
            has_image = request.reference_image().is_some(),
            props = request.props().len(),
            "Starting run"
        );
        self.snapshot.send_replace(PipelineSnapshot::default());
        self.request = Some(request.clone());
        self.finished_at = None;

        let outcome = self.run(&request).await;
        match outcome.and_then(|()| self.advance(RunState::Done)) {
            Ok(()) => info!("Run complete"),
            Err(e) => {
                error!(error = %e, state = %self.state(), "Generation failed");
                self.fail();
            }
        }
        self.finished_at = Some(Utc::now());
        self.state()
    }

    async fn run(&self, request: &GenerationRequest) -> GenerationResult<()> {
        if let Some(image) = request.reference_image() {
            self.advance(RunState::AnalyzingIdentity)?;
            let description = self.service.describe_identity(image).await?;
            self.snapshot
                .send_modify(|snapshot| snapshot.identity_description = description);
        }

        self.advance(RunState::WritingScript)?;
        let script = self
            .service
            .generate_script(request.topic(), request.persona().as_deref())
            .await?;
        self.snapshot
            .send_modify(|snapshot| snapshot.script = Some(script.clone()));

        let identity = self.snapshot.borrow().identity_description.clone();
        let prop_titles: Vec<String> = request
            .props()
            .iter()
            .map(|prop| prop.title().clone())
            .collect();

        for (index, scene) in script.scenes().iter().enumerate() {
            self.advance(RunState::RenderingStoryboard(index))?;

            let mut builder = StoryboardPromptBuilder::default();
            builder
                .scene_index(index)
                .visual_prompt(scene.visual_prompt())
                .identity_description(identity.clone())
                .topic(request.topic().clone())
                .prop_titles(prop_titles.clone())
                .quality(*request.image_quality());
            if let Some(style) = script.global_visual_style() {
                builder.global_visual_style(style);
            }
            if let Some(persona) = request.persona() {
                builder.persona(persona.clone());
            }
            let prompt = builder.build().map_err(|e| {
                GenerationError::new(GenerationErrorKind::Request(e.to_string()))
            })?;

            let image = self.service.generate_storyboard_image(&prompt).await?;
            self.snapshot
                .send_modify(|snapshot| snapshot.images.push(image));
        }

        self.advance(RunState::ComposingMusic)?;
        let mut builder = MusicPromptBuilder::default();
        builder
            .mood(request.music_mood())
            .genre(request.music_genre())
            .topic(request.topic().clone())
            .emotional_direction(script.opening_line());
        if let Some(persona) = request.persona() {
            builder.persona(persona.clone());
        }
        let prompt = builder
            .build()
            .map_err(|e| GenerationError::new(GenerationErrorKind::Request(e.to_string())))?;

        let music = self.service.generate_music_prompt(&prompt).await?;
        self.snapshot
            .send_modify(|snapshot| snapshot.music = Some(music));
        Ok(())
    }

    /// Move to `next` and publish. Illegal transitions are refused.
    fn advance(&self, next: RunState) -> GenerationResult<()> {
        let mut accepted = false;
        self.snapshot.send_if_modified(|snapshot| {
            if !snapshot.state.can_advance_to(&next) {
                return false;
            }
            debug!(from = %snapshot.state, to = %next, "Transition");
            snapshot.step = snapshot.step.max(next.step());
            snapshot.phase_label = next.phase_label(SCENE_COUNT);
            snapshot.state = next.clone();
            accepted = true;
            true
        });

        if accepted {
            Ok(())
        } else {
            warn!(to = %next, "Refused illegal transition");
            Err(GenerationError::new(GenerationErrorKind::Request(format!(
                "illegal transition to {}",
                next
            ))))
        }
    }

    fn fail(&self) {
        let failed = RunState::Failed(GENERIC_FAILURE_MESSAGE.to_string());
        self.snapshot.send_modify(|snapshot| {
            if snapshot.state.can_advance_to(&failed) {
                snapshot.state = failed;
                snapshot.phase_label = None;
                snapshot.error_message = Some(GENERIC_FAILURE_MESSAGE.to_string());
            }
        });
    }

    /// Return to `Idle` from `Done` or `Failed`, discarding the run's
    /// results. Returns whether a reset happened.
    pub fn reset(&mut self) -> bool {
        if !self.state().is_terminal() {
            debug!(state = %self.state(), "Reset ignored");
            return false;
        }
        self.snapshot.send_replace(PipelineSnapshot::default());
        self.request = None;
        self.finished_at = None;
        info!("Pipeline reset");
        true
    }

    fn metadata(&self) -> Option<BundleMetadata> {
        let request = self.request.as_ref()?;
        let finished_at = self.finished_at?;
        BundleMetadataBuilder::default()
            .timestamp(finished_at)
            .persona(request.persona().clone())
            .topic(request.topic().clone())
            .music_genre(request.music_genre())
            .music_mood(request.music_mood())
            .image_model(request.image_quality().model().id)
            .script_model(SCRIPT_MODEL)
            .prop_count(request.props().len())
            .build()
            .map_err(|e| warn!(error = %e, "Failed to build bundle metadata"))
            .ok()
    }

    fn assemble_from_snapshot(&self) -> Option<Bundle> {
        let metadata = self.metadata()?;
        let request = self.request.as_ref()?;
        let snapshot = self.snapshot.borrow();
        let script = snapshot.script.as_ref()?;
        assemble(
            script,
            &snapshot.images,
            snapshot.music.as_ref(),
            request.props(),
            metadata,
        )
    }

    /// The completed run as a bundle. `None` unless the run is done.
    pub fn bundle(&self) -> Option<Bundle> {
        if !self.snapshot.borrow().is_done() {
            return None;
        }
        self.assemble_from_snapshot()
    }

    /// Whatever the last run produced as a bundle, for partial downloads.
    /// `None` until a run has ended with a script and at least one frame.
    ///
    /// The metadata timestamp is the moment the run ended, so repeated
    /// exports of one run are byte-identical.
    pub fn partial_bundle(&self) -> Option<Bundle> {
        self.assemble_from_snapshot()
    }
}
