//! Run state machine.

use serde::{Deserialize, Serialize};

/// Number of progress steps shown to the user.
pub const TOTAL_STEPS: u8 = 4;

/// Where a run currently is.
///
/// Transitions only move forward. `Failed` can be entered from any active
/// state and is left only by an explicit reset, as is `Done`.
///
/// # Examples
///
/// ```
/// use visionary_core::RunState;
///
/// let state = RunState::RenderingStoryboard(1);
/// assert_eq!(state.step(), 3);
/// assert_eq!(
///     state.phase_label(3).as_deref(),
///     Some("Phase 3/4: Generating storyboard 2 of 3...")
/// );
/// assert!(state.can_advance_to(&RunState::RenderingStoryboard(2)));
/// assert!(!state.can_advance_to(&RunState::WritingScript));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum RunState {
    /// Nothing running
    #[default]
    #[display("idle")]
    Idle,
    /// Describing the reference photo
    #[display("analyzing identity")]
    AnalyzingIdentity,
    /// Writing the three-beat script
    #[display("writing script")]
    WritingScript,
    /// Rendering the frame for the given zero-based scene
    #[display("rendering storyboard {}", _0)]
    RenderingStoryboard(usize),
    /// Producing the music specification
    #[display("composing music")]
    ComposingMusic,
    /// Every phase succeeded
    #[display("done")]
    Done,
    /// A phase failed; holds the user-facing message
    #[display("failed: {}", _0)]
    Failed(String),
}

impl RunState {
    /// True while a phase is in flight.
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            RunState::AnalyzingIdentity
                | RunState::WritingScript
                | RunState::RenderingStoryboard(_)
                | RunState::ComposingMusic
        )
    }

    /// True for `Done` and `Failed`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunState::Done | RunState::Failed(_))
    }

    /// Whether `next` is a legal successor of this state.
    pub fn can_advance_to(&self, next: &RunState) -> bool {
        use RunState::*;
        match (self, next) {
            (_, Failed(_)) => self.is_active(),
            (Done | Failed(_), Idle) => true,
            (Idle, AnalyzingIdentity | WritingScript) => true,
            (AnalyzingIdentity, WritingScript) => true,
            (WritingScript, RenderingStoryboard(0)) => true,
            (RenderingStoryboard(current), RenderingStoryboard(following)) => {
                *following == current + 1
            }
            (RenderingStoryboard(_), ComposingMusic) => true,
            (ComposingMusic, Done) => true,
            _ => false,
        }
    }

    /// Progress step, 1 through [`TOTAL_STEPS`] while active. `Done` reports
    /// the final step; `Idle` and `Failed` report zero.
    pub fn step(&self) -> u8 {
        match self {
            RunState::Idle | RunState::Failed(_) => 0,
            RunState::AnalyzingIdentity => 1,
            RunState::WritingScript => 2,
            RunState::RenderingStoryboard(_) => 3,
            RunState::ComposingMusic | RunState::Done => TOTAL_STEPS,
        }
    }

    /// Human-readable label for active states.
    pub fn phase_label(&self, total_scenes: usize) -> Option<String> {
        let label = match self {
            RunState::AnalyzingIdentity => "Analyzing your identity...".to_string(),
            RunState::WritingScript => "Writing your viral script...".to_string(),
            RunState::RenderingStoryboard(index) => {
                format!("Generating storyboard {} of {}...", index + 1, total_scenes)
            }
            RunState::ComposingMusic => "Composing your soundtrack...".to_string(),
            _ => return None,
        };
        Some(format!("Phase {}/{}: {}", self.step(), TOTAL_STEPS, label))
    }
}
