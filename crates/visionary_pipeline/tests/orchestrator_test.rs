//! Orchestrator state machine tests.

mod test_utils;

use test_utils::{MockService, ServiceCall, empty_store, request, store_with_key};
use visionary_core::{GenerationRequestBuilder, PropImage, QualityTier, RunState};
use visionary_pipeline::{GENERIC_FAILURE_MESSAGE, PipelineOrchestrator};

fn observed(service: MockService) -> PipelineOrchestrator<MockService> {
    let orchestrator = PipelineOrchestrator::new(service, store_with_key());
    orchestrator.service().observe(orchestrator.subscribe());
    orchestrator
}

fn states(calls: &[ServiceCall]) -> Vec<RunState> {
    calls
        .iter()
        .map(|call| match call {
            ServiceCall::Identity { state }
            | ServiceCall::Script { state, .. }
            | ServiceCall::Storyboard { state, .. }
            | ServiceCall::Music { state, .. } => state.clone(),
        })
        .collect()
}

#[tokio::test]
async fn test_full_run_with_image() {
    let mut orchestrator = observed(MockService::new_success());

    let final_state = orchestrator.generate(request(true)).await;

    assert_eq!(final_state, RunState::Done);
    assert_eq!(
        states(&orchestrator.service().calls()),
        vec![
            RunState::AnalyzingIdentity,
            RunState::WritingScript,
            RunState::RenderingStoryboard(0),
            RunState::RenderingStoryboard(1),
            RunState::RenderingStoryboard(2),
            RunState::ComposingMusic,
        ]
    );

    let snapshot = orchestrator.snapshot();
    assert_eq!(snapshot.script().as_ref().unwrap().scenes().len(), 3);
    assert_eq!(snapshot.images().len(), 3);
    assert!(snapshot.music().is_some());
    assert_eq!(*snapshot.step(), 4);
    assert_eq!(snapshot.error_message(), &None);
    assert_eq!(snapshot.identity_description(), "a person with short brown hair");
}

#[tokio::test]
async fn test_no_image_skips_identity_phase() {
    let mut orchestrator = observed(MockService::new_success());

    assert_eq!(orchestrator.generate(request(false)).await, RunState::Done);

    let calls = orchestrator.service().calls();
    assert_eq!(states(&calls)[0], RunState::WritingScript);
    assert!(orchestrator.snapshot().identity_description().is_empty());

    for call in &calls {
        if let ServiceCall::Storyboard { prompt, .. } = call {
            assert!(prompt.identity_description().is_empty());
            assert_eq!(prompt.global_visual_style().as_deref(), Some("warm amber light"));
        }
    }
}

#[tokio::test]
async fn test_script_request_without_persona_is_well_formed() {
    let mut orchestrator = observed(MockService::new_success());
    let request = GenerationRequestBuilder::default()
        .topic("future of work")
        .build()
        .unwrap();

    assert_eq!(orchestrator.generate(request).await, RunState::Done);
    match &orchestrator.service().calls()[0] {
        ServiceCall::Script { topic, persona, .. } => {
            assert_eq!(topic, "future of work");
            assert_eq!(persona, &None);
        }
        other => panic!("unexpected call {:?}", other),
    }
}

#[tokio::test]
async fn test_storyboard_is_sequential_and_incremental() {
    let mut orchestrator = observed(MockService::new_success());
    orchestrator.generate(request(true)).await;

    let storyboard: Vec<(usize, usize)> = orchestrator
        .service()
        .calls()
        .into_iter()
        .filter_map(|call| match call {
            ServiceCall::Storyboard {
                prompt,
                published_images,
                ..
            } => Some((*prompt.scene_index(), published_images)),
            _ => None,
        })
        .collect();

    assert_eq!(storyboard, vec![(0, 0), (1, 1), (2, 2)]);
    let indices: Vec<usize> = orchestrator
        .snapshot()
        .images()
        .iter()
        .map(|image| *image.scene_index())
        .collect();
    assert_eq!(indices, vec![0, 1, 2]);
}

#[tokio::test]
async fn test_empty_topic_is_a_no_op() {
    for topic in ["", "   "] {
        let mut orchestrator = observed(MockService::new_success());
        let request = GenerationRequestBuilder::default()
            .topic(topic)
            .persona("Storyteller")
            .build()
            .unwrap();

        assert_eq!(orchestrator.generate(request).await, RunState::Idle);
        assert_eq!(orchestrator.service().call_count(), 0);
        assert_eq!(*orchestrator.snapshot().step(), 0);
    }
}

#[tokio::test]
async fn test_missing_credential_is_a_no_op() {
    let mut orchestrator = PipelineOrchestrator::new(MockService::new_success(), empty_store());
    assert_eq!(orchestrator.generate(request(true)).await, RunState::Idle);
    assert_eq!(orchestrator.service().call_count(), 0);
}

#[tokio::test]
async fn test_script_failure_fails_run_with_generic_message() {
    let mut orchestrator = observed(MockService::new_failing("script"));

    let final_state = orchestrator.generate(request(false)).await;

    assert_eq!(
        final_state,
        RunState::Failed(GENERIC_FAILURE_MESSAGE.to_string())
    );
    let snapshot = orchestrator.snapshot();
    assert!(snapshot.images().is_empty());
    assert_eq!(
        snapshot.error_message().as_deref(),
        Some(GENERIC_FAILURE_MESSAGE)
    );
    assert!(!GENERIC_FAILURE_MESSAGE.contains("simulated"));
    assert_eq!(*snapshot.step(), 2);
    assert_eq!(orchestrator.service().call_count(), 1);
}

#[tokio::test]
async fn test_storyboard_failure_abandons_remaining_scenes() {
    let mut orchestrator = observed(MockService::new_failing("storyboard"));

    let final_state = orchestrator.generate(request(true)).await;

    assert!(matches!(final_state, RunState::Failed(_)));
    let calls = orchestrator.service().calls();
    assert_eq!(calls.len(), 3);
    assert!(!calls.iter().any(|call| matches!(call, ServiceCall::Music { .. })));
    assert!(orchestrator.bundle().is_none());
}

#[tokio::test]
async fn test_failed_run_needs_reset_before_restart() {
    let mut orchestrator = observed(MockService::new_failing("music"));

    orchestrator.generate(request(false)).await;
    let calls_after_failure = orchestrator.service().call_count();

    let state = orchestrator.generate(request(false)).await;
    assert!(matches!(state, RunState::Failed(_)));
    assert_eq!(orchestrator.service().call_count(), calls_after_failure);

    assert!(orchestrator.reset());
    assert_eq!(orchestrator.state(), RunState::Idle);
    assert_eq!(orchestrator.snapshot().error_message(), &None);
    assert!(orchestrator.snapshot().images().is_empty());
}

#[tokio::test]
async fn test_done_run_is_not_restarted_without_reset() {
    let mut orchestrator = observed(MockService::new_success());
    orchestrator.generate(request(false)).await;
    let calls = orchestrator.service().call_count();

    assert_eq!(orchestrator.generate(request(false)).await, RunState::Done);
    assert_eq!(orchestrator.service().call_count(), calls);

    assert!(orchestrator.reset());
    assert_eq!(orchestrator.generate(request(false)).await, RunState::Done);
    assert_eq!(orchestrator.service().call_count(), calls * 2);
}

#[tokio::test]
async fn test_reset_from_idle_is_refused() {
    let mut orchestrator = observed(MockService::new_success());
    assert!(!orchestrator.reset());
}

#[tokio::test]
async fn test_music_prompt_uses_opening_line_and_persona_defaults() {
    let mut orchestrator = observed(MockService::new_success());
    orchestrator.generate(request(false)).await;

    let music_call = orchestrator
        .service()
        .calls()
        .into_iter()
        .find_map(|call| match call {
            ServiceCall::Music { prompt, .. } => Some(prompt),
            _ => None,
        })
        .unwrap();
    assert_eq!(music_call.emotional_direction(), "Your job is about to change.");
    assert_eq!(music_call.genre(), "Ambient");
    assert_eq!(music_call.mood(), "Calm");
}

#[tokio::test]
async fn test_bundle_after_done_carries_metadata() -> anyhow::Result<()> {
    let mut orchestrator = observed(MockService::new_success());
    let prop = PropImage::new("red guitar", test_utils::jpeg());
    let request = GenerationRequestBuilder::default()
        .topic("future of work")
        .persona("Storyteller")
        .image_quality(QualityTier::Artistic)
        .props(vec![prop])
        .build()?;

    orchestrator.generate(request).await;
    let bundle = orchestrator.bundle().unwrap();

    assert_eq!(bundle.metadata().image_model(), "gemini-3-pro-image-preview");
    assert_eq!(bundle.metadata().script_model(), "gemini-2.5-flash");
    assert_eq!(*bundle.metadata().prop_count(), 1);
    assert_eq!(bundle.images().len(), 3);
    assert!(bundle.music().is_some());

    let prompts: Vec<Vec<String>> = orchestrator
        .service()
        .calls()
        .into_iter()
        .filter_map(|call| match call {
            ServiceCall::Storyboard { prompt, .. } => Some(prompt.prop_titles().clone()),
            _ => None,
        })
        .collect();
    assert!(prompts.iter().all(|titles| titles == &vec!["red guitar".to_string()]));
    Ok(())
}

#[tokio::test]
async fn test_partial_bundle_after_music_failure() {
    let mut orchestrator = observed(MockService::new_failing("music"));
    orchestrator.generate(request(false)).await;

    assert!(orchestrator.bundle().is_none());
    let partial = orchestrator.partial_bundle().unwrap();
    assert_eq!(partial.images().len(), 3);
    assert!(partial.music().is_none());
}

#[tokio::test]
async fn test_subscribers_see_final_snapshot() -> anyhow::Result<()> {
    let mut orchestrator = observed(MockService::new_success());
    let mut rx = orchestrator.subscribe();

    orchestrator.generate(request(true)).await;

    rx.changed().await?;
    let snapshot = rx.borrow_and_update().clone();
    assert!(snapshot.is_done());
    assert_eq!(snapshot.phase_label(), &None);
    Ok(())
}

#[tokio::test]
async fn test_repeated_exports_of_one_run_are_identical() -> anyhow::Result<()> {
    let mut orchestrator = observed(MockService::new_success());
    orchestrator.generate(request(true)).await;

    let first = orchestrator.bundle().unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let second = orchestrator.bundle().unwrap();

    assert_eq!(first.metadata().timestamp(), second.metadata().timestamp());
    assert_eq!(first.to_archive()?, second.to_archive()?);
    Ok(())
}

#[tokio::test]
async fn test_repeated_partial_exports_are_identical() -> anyhow::Result<()> {
    let mut orchestrator = observed(MockService::new_failing("music"));
    orchestrator.generate(request(false)).await;

    let first = orchestrator.partial_bundle().unwrap().to_archive()?;
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let second = orchestrator.partial_bundle().unwrap().to_archive()?;

    assert_eq!(first, second);
    Ok(())
}

#[tokio::test]
async fn test_reset_clears_bundles() {
    let mut orchestrator = observed(MockService::new_success());
    orchestrator.generate(request(false)).await;
    assert!(orchestrator.reset());

    assert!(orchestrator.bundle().is_none());
    assert!(orchestrator.partial_bundle().is_none());
}
