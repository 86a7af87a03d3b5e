//! Configuration loading tests.

use std::path::PathBuf;
use visionary::{QualityTier, VisionaryConfig, VisionaryErrorKind};

#[test]
fn test_bundled_defaults() -> anyhow::Result<()> {
    let config = VisionaryConfig::bundled()?;

    assert_eq!(config.pipeline.default_quality, QualityTier::Best);
    assert!(config.pipeline.default_persona.is_none());
    assert_eq!(config.export.output_dir, PathBuf::from("visionary-output"));
    assert!(config.storage.scope_dir.is_none());
    Ok(())
}

#[test]
fn test_file_overrides_defaults() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("visionary.toml");
    std::fs::write(
        &path,
        r#"
[pipeline]
default_persona = "Storyteller"
default_quality = "fast"

[storage]
scope_dir = "/tmp/visionary-scope"
"#,
    )?;

    let config = VisionaryConfig::from_file(&path)?;

    assert_eq!(
        config.pipeline.default_persona.as_deref(),
        Some("Storyteller")
    );
    assert_eq!(config.pipeline.default_quality, QualityTier::Fast);
    assert_eq!(
        config.storage.scope_dir,
        Some(PathBuf::from("/tmp/visionary-scope"))
    );
    // Untouched tables keep the bundled values
    assert_eq!(config.export.output_dir, PathBuf::from("visionary-output"));
    Ok(())
}

#[test]
fn test_unknown_quality_is_a_config_error() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("visionary.toml");
    std::fs::write(&path, "[pipeline]\ndefault_quality = \"ultra\"\n")?;

    let err = VisionaryConfig::from_file(&path).unwrap_err();
    assert!(matches!(err.kind(), VisionaryErrorKind::Config(_)));
    Ok(())
}

#[test]
fn test_missing_file_is_a_config_error() {
    let err = VisionaryConfig::from_file("/nonexistent/visionary.toml").unwrap_err();
    assert!(matches!(err.kind(), VisionaryErrorKind::Config(_)));
}
