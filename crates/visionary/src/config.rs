//! Layered configuration for the `visionary` binary.
//!
//! Sources, lowest precedence first:
//! - Bundled defaults (include_str! from visionary.toml)
//! - `~/.config/visionary/visionary.toml`
//! - `./visionary.toml`

use config::{Config, File, FileFormat};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};
use visionary_core::QualityTier;
use visionary_error::{ConfigError, VisionaryError, VisionaryResult};

const DEFAULT_CONFIG: &str = include_str!("../../../visionary.toml");

/// Defaults applied to `generate` when flags are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PipelineConfig {
    /// Persona used when `--persona` is absent
    #[serde(default)]
    pub default_persona: Option<String>,
    /// Image tier used when `--quality` is absent
    #[serde(default)]
    pub default_quality: QualityTier,
}

/// Where exports are written.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExportConfig {
    /// Directory used when `--out` is absent
    pub output_dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("visionary-output"),
        }
    }
}

/// Credential persistence settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StorageConfig {
    /// Directory holding `credentials.json`; the platform config dir when unset
    #[serde(default)]
    pub scope_dir: Option<PathBuf>,
}

/// Complete configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct VisionaryConfig {
    /// `[pipeline]` table
    #[serde(default)]
    pub pipeline: PipelineConfig,
    /// `[export]` table
    #[serde(default)]
    pub export: ExportConfig,
    /// `[storage]` table
    #[serde(default)]
    pub storage: StorageConfig,
}

impl VisionaryConfig {
    /// Load configuration with precedence: current dir > home dir > bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a present file cannot be parsed.
    #[instrument]
    pub fn load() -> VisionaryResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/visionary/visionary.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("visionary").required(false));

        builder
            .build()
            .map_err(|e| {
                VisionaryError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                VisionaryError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load a single file layered over the bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the file is missing or malformed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> VisionaryResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                VisionaryError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                VisionaryError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Parse the bundled defaults alone.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the bundled file is malformed.
    pub fn bundled() -> VisionaryResult<Self> {
        Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .and_then(Config::try_deserialize::<Self>)
            .map_err(|e| {
                VisionaryError::from(ConfigError::new(format!(
                    "Failed to parse bundled configuration: {}",
                    e
                )))
            })
    }
}
