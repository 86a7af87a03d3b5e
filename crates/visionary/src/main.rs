//! Visionary CLI binary.
//!
//! This binary provides command-line access to Visionary's functionality:
//! - Store and inspect the Google AI API key
//! - Browse personas and image models
//! - Generate a script, storyboard and soundtrack brief for a topic

use clap::Parser;
use tracing_subscriber::EnvFilter;
use visionary::VisionaryConfig;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, handle_key_command, list_models, list_personas, run_generate};

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = VisionaryConfig::load()?;

    // Execute the requested command
    match cli.command {
        Commands::Key(key_cmd) => {
            handle_key_command(key_cmd, &config)?;
        }

        Commands::Personas => list_personas(),

        Commands::Models => list_models(),

        Commands::Generate(args) => {
            run_generate(args, &config).await?;
        }
    }

    Ok(())
}
