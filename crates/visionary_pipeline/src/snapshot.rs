//! Observable run state.

use visionary_core::{MusicSpec, RunState, ScriptResult, StoryboardImage};

/// Everything a front-end needs to render a run.
///
/// `step` and `phase_label` are for display only.
#[derive(Debug, Clone, Default, PartialEq, Eq, derive_getters::Getters)]
pub struct PipelineSnapshot {
    /// Current state
    pub(crate) state: RunState,
    /// Highest progress step reached, 0 before a run starts
    pub(crate) step: u8,
    /// Label for the active phase
    pub(crate) phase_label: Option<String>,
    /// Identity lock, empty when no photo was supplied
    pub(crate) identity_description: String,
    /// Script once written
    pub(crate) script: Option<ScriptResult>,
    /// Frames rendered so far, in scene order
    pub(crate) images: Vec<StoryboardImage>,
    /// Soundtrack once composed
    pub(crate) music: Option<MusicSpec>,
    /// User-facing failure message
    pub(crate) error_message: Option<String>,
}

impl PipelineSnapshot {
    /// True once every phase has succeeded.
    pub fn is_done(&self) -> bool {
        self.state == RunState::Done
    }
}
