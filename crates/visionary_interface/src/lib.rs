//! Trait definitions for the Visionary generation boundary.
//!
//! Two seams are defined here:
//! - [`GenerativeBackend`]: the raw wire calls to a hosted generative service
//! - [`GenerationService`]: the typed operations the pipeline drives

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{GenerationService, GenerativeBackend};
pub use types::{
    GeneratedImage, ImageRequest, MusicPrompt, MusicPromptBuilder, StoryboardPrompt,
    StoryboardPromptBuilder, TextRequest, TextRequestBuilder,
};
