//! Static lookup tables: personas, image quality tiers and music lists.
//!
//! These are the only configuration surface for model selection. Nothing
//! here is read from disk.

mod image_model;
mod music;
mod persona;

pub use image_model::{IMAGE_MODELS, ImageCallShape, ImageModel, QualityTier};
pub use music::{MUSIC_GENRES, MUSIC_MOODS};
pub use persona::{MusicDefaults, PERSONA_PRESETS, PERSONAS, PersonaPreset, persona_preset};

/// Text model used for identity analysis, scripts and music prompts.
pub const SCRIPT_MODEL: &str = "gemini-2.5-flash";
