//! Generation client for Visionary.
//!
//! [`GenerationClient`] implements the four typed pipeline operations on top
//! of any [`GenerativeBackend`](visionary_interface::GenerativeBackend). The
//! [`GeminiBackend`] talks to the hosted Gemini / Imagen REST API.
//!
//! Prompt assembly lives in [`prompt`] and strict response decoding in
//! [`schema`]; both are pure and tested without a network.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod gemini;
mod metrics;
pub mod prompt;
pub mod schema;

pub use client::GenerationClient;
pub use gemini::{DEFAULT_BASE_URL, GeminiBackend};
pub use metrics::{GenerationMetrics, classify_error};
