//! CLI command definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use visionary_core::QualityTier;

/// Visionary - turn a topic, persona and selfie into a vertical-video storyboard
#[derive(Parser, Debug)]
#[command(name = "visionary")]
#[command(about = "Turn a topic, persona and selfie into a vertical-video storyboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage the Google AI API key
    #[command(subcommand)]
    Key(KeyCommands),

    /// List creative personas and their presets
    Personas,

    /// List image models by quality tier
    Models,

    /// Generate a script, storyboard and soundtrack brief
    Generate(GenerateArgs),
}

/// API key subcommands
#[derive(Subcommand, Debug)]
pub enum KeyCommands {
    /// Store an API key (falls back to GEMINI_API_KEY when omitted)
    Set {
        /// The key to store
        key: Option<String>,
    },

    /// Remove the stored API key
    Clear,

    /// Show whether a key is stored
    Status,
}

/// Arguments for `generate`
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Subject of the video
    #[arg(long)]
    pub topic: String,

    /// Creative persona, e.g. "Cape Town Rapper"
    #[arg(long)]
    pub persona: Option<String>,

    /// Selfie used to keep the subject's identity consistent
    #[arg(long)]
    pub image: Option<PathBuf>,

    /// Image quality tier
    #[arg(long)]
    pub quality: Option<QualityTier>,

    /// Soundtrack mood, defaults to the persona's
    #[arg(long)]
    pub mood: Option<String>,

    /// Soundtrack genre, defaults to the persona's
    #[arg(long)]
    pub genre: Option<String>,

    /// Prop photo as TITLE=FILE; repeatable
    #[arg(long = "prop", value_name = "TITLE=FILE")]
    pub props: Vec<String>,

    /// Output directory
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn generate_collects_repeated_props() {
        let cli = Cli::try_parse_from([
            "visionary",
            "generate",
            "--topic",
            "Township hustle",
            "--persona",
            "Cape Town Rapper",
            "--quality",
            "artistic",
            "--prop",
            "Sneakers=shoes.png",
            "--prop",
            "Chain=chain.jpg",
        ])
        .unwrap();

        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.topic, "Township hustle");
        assert_eq!(args.persona.as_deref(), Some("Cape Town Rapper"));
        assert_eq!(args.quality, Some(QualityTier::Artistic));
        assert_eq!(args.props, vec!["Sneakers=shoes.png", "Chain=chain.jpg"]);
        assert!(args.out.is_none());
    }

    #[test]
    fn unknown_quality_is_rejected() {
        let result = Cli::try_parse_from([
            "visionary", "generate", "--topic", "x", "--quality", "ultra",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn verbose_flag_is_global() {
        let cli = Cli::try_parse_from(["visionary", "key", "status", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Key(KeyCommands::Status)));
    }

    #[test]
    fn key_set_value_is_optional() {
        let cli = Cli::try_parse_from(["visionary", "key", "set"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Key(KeyCommands::Set { key: None })
        ));
    }
}
