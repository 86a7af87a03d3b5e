//! Pipeline orchestration for Visionary.
//!
//! The [`PipelineOrchestrator`] drives one run through identity analysis,
//! script writing, storyboard rendering and music composition, publishing a
//! [`PipelineSnapshot`] after every change.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod orchestrator;
mod snapshot;

pub use orchestrator::{GENERIC_FAILURE_MESSAGE, PipelineOrchestrator};
pub use snapshot::PipelineSnapshot;
