//! The `generate` command.

use super::commands::GenerateArgs;
use super::key::open_store;
use std::path::{Path, PathBuf};
use visionary::VisionaryConfig;
use visionary_bundle::write_to_dir;
use visionary_core::{
    GenerationRequest, GenerationRequestBuilder, PropImage, ReferenceImage, RunState,
};
use visionary_error::{
    GenerationError, GenerationErrorKind, ValidationError, ValidationErrorKind, VisionaryResult,
};
use visionary_interface::GenerationService;
use visionary_models::{GeminiBackend, GenerationClient};
use visionary_pipeline::PipelineOrchestrator;

/// Parse a `TITLE=FILE` prop argument and load the photo.
///
/// # Errors
///
/// Returns `InvalidProp` when either side is empty, or the image errors from
/// [`ReferenceImage::from_path`].
pub fn parse_prop(arg: &str) -> Result<PropImage, ValidationError> {
    let invalid = || ValidationError::new(ValidationErrorKind::InvalidProp(arg.to_string()));
    let (title, path) = arg.split_once('=').ok_or_else(invalid)?;
    let (title, path) = (title.trim(), path.trim());
    if title.is_empty() || path.is_empty() {
        return Err(invalid());
    }
    Ok(PropImage::new(title, ReferenceImage::from_path(path)?))
}

/// Run the full pipeline and write the outputs.
#[tracing::instrument(skip_all, fields(topic = %args.topic))]
pub async fn run_generate(args: GenerateArgs, config: &VisionaryConfig) -> VisionaryResult<()> {
    let mut builder = GenerationRequestBuilder::default();
    builder
        .topic(args.topic.trim())
        .image_quality(args.quality.unwrap_or(config.pipeline.default_quality));

    if let Some(persona) = args.persona.or_else(|| config.pipeline.default_persona.clone()) {
        builder.persona(persona);
    }
    if let Some(path) = &args.image {
        builder.reference_image(ReferenceImage::from_path(path)?);
    }
    if let Some(mood) = args.mood {
        builder.music_mood(mood);
    }
    if let Some(genre) = args.genre {
        builder.music_genre(genre);
    }
    let props = args
        .props
        .iter()
        .map(|arg| parse_prop(arg))
        .collect::<Result<Vec<_>, _>>()?;
    builder.props(props);

    let request = builder.build().map_err(ValidationError::from)?;
    request.validate()?;

    let store = open_store(config)?;
    if !store.has() {
        return Err(GenerationError::new(GenerationErrorKind::MissingCredential).into());
    }

    let client = GenerationClient::new(GeminiBackend::new(), store.clone());
    let orchestrator = PipelineOrchestrator::new(client, store);
    let out_dir = args.out.unwrap_or_else(|| config.export.output_dir.clone());

    let outcome = execute(orchestrator, request, &out_dir).await?;
    for path in outcome.written() {
        println!("Wrote {}", path.display());
    }
    match outcome.state() {
        RunState::Done => {
            if let Some(hook) = outcome.hook() {
                println!();
                println!("Hook: {}", hook);
            }
        }
        RunState::Failed(message) => eprintln!("{}", message),
        other => tracing::debug!(state = %other, "Run did not start"),
    }

    Ok(())
}

/// What a run left behind.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct RunOutcome {
    /// Final state of the run
    state: RunState,
    /// Files written, in the order written
    written: Vec<PathBuf>,
    /// Opening line of the script, when one was written
    hook: Option<String>,
}

/// Drive one run, printing phase labels as they are published, then write
/// the bundle to `out_dir`, or whatever was produced to `out_dir/partial`
/// when the run failed.
pub async fn execute<S: GenerationService>(
    mut orchestrator: PipelineOrchestrator<S>,
    request: GenerationRequest,
    out_dir: &Path,
) -> VisionaryResult<RunOutcome> {
    let mut updates = orchestrator.subscribe();
    let progress = tokio::spawn(async move {
        let mut last_label = None;
        while updates.changed().await.is_ok() {
            let label = updates.borrow_and_update().phase_label().clone();
            if label.is_some() && label != last_label {
                if let Some(text) = &label {
                    println!("{}", text);
                }
                last_label = label;
            }
        }
    });

    let state = orchestrator.generate(request).await;
    let (bundle, target) = match &state {
        RunState::Done => (orchestrator.bundle(), out_dir.to_path_buf()),
        RunState::Failed(_) => (orchestrator.partial_bundle(), out_dir.join("partial")),
        _ => (None, out_dir.to_path_buf()),
    };
    let hook = orchestrator
        .snapshot()
        .script()
        .as_ref()
        .map(|script| script.opening_line().to_string());

    // Dropping the orchestrator closes the channel so the printer drains and exits.
    drop(orchestrator);
    if let Err(e) = progress.await {
        tracing::warn!(error = %e, "Progress printer stopped abnormally");
    }

    let written = match bundle {
        Some(bundle) => write_to_dir(&bundle, &target)?,
        None => Vec::new(),
    };
    Ok(RunOutcome {
        state,
        written,
        hook,
    })
}
