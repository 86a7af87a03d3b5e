//! Gemini / Imagen REST backend.

mod backend;
mod dto;

pub use backend::{DEFAULT_BASE_URL, GeminiBackend};
