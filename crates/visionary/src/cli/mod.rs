//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the visionary binary.

mod catalog;
mod commands;
mod generate;
mod key;

pub use catalog::{list_models, list_personas};
pub use commands::{Cli, Commands};
pub use generate::run_generate;
pub use key::handle_key_command;
