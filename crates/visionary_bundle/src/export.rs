//! Single-artifact exports and the on-disk layout.

use crate::bundle::to_json;
use crate::{Bundle, DeterministicArchive};
use serde::Serialize;
use std::path::{Path, PathBuf};
use visionary_core::{MusicSpec, ScriptResult, StoryboardImage};
use visionary_error::{BundleError, BundleErrorKind, BundleResult};

/// File name of the full archive.
pub const ARCHIVE_FILE: &str = "visionary-bundle.zip";
/// File name of the script export.
pub const SCRIPT_FILE: &str = "script.json";
/// File name of the storyboard archive.
pub const STORYBOARD_FILE: &str = "storyboard.zip";
/// File name of the music export.
pub const MUSIC_FILE: &str = "music.json";

/// The script flattened to its three beats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptExport {
    /// First beat's spoken line
    pub hook: String,
    /// Second beat's spoken line
    pub flow: String,
    /// Third beat's spoken line
    pub punchline: String,
}

impl ScriptExport {
    /// Flatten a script. `None` when it has no scenes.
    pub fn from_script(script: &ScriptResult) -> Option<Self> {
        let line = |index: usize| {
            script
                .scenes()
                .get(index)
                .map(|scene| scene.script().to_string())
                .unwrap_or_default()
        };
        if script.scenes().is_empty() {
            return None;
        }
        Some(Self {
            hook: line(0),
            flow: line(1),
            punchline: line(2),
        })
    }
}

/// Script as `{hook, flow, punchline}` JSON. `Ok(None)` when there is no
/// script yet.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn export_script(script: &ScriptResult) -> BundleResult<Option<Vec<u8>>> {
    ScriptExport::from_script(script)
        .map(|export| to_json(SCRIPT_FILE, &export))
        .transpose()
}

/// Storyboard frames as an archive of `scene1.png`..`sceneN.png`. `Ok(None)`
/// when there are no images.
///
/// # Errors
///
/// Returns an error if the archive cannot be written.
pub fn export_storyboard(images: &[StoryboardImage]) -> BundleResult<Option<Vec<u8>>> {
    if images.is_empty() {
        return Ok(None);
    }

    let mut ordered: Vec<&StoryboardImage> = images.iter().collect();
    ordered.sort_by_key(|image| *image.scene_index());

    let mut archive = DeterministicArchive::new();
    for (position, image) in ordered.into_iter().enumerate() {
        archive.add(&format!("scene{}.png", position + 1), image.data())?;
    }
    archive.finish().map(Some)
}

/// Music spec as JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn export_music(music: &MusicSpec) -> BundleResult<Vec<u8>> {
    to_json(MUSIC_FILE, music)
}

fn write_file(dir: &Path, name: &str, data: &[u8]) -> BundleResult<PathBuf> {
    let path = dir.join(name);
    std::fs::write(&path, data).map_err(|e| {
        BundleError::new(BundleErrorKind::FileWrite(format!("{}: {}", path.display(), e)))
    })?;
    tracing::info!(path = %path.display(), bytes = data.len(), "Wrote export");
    Ok(path)
}

/// Write the full archive plus the individual exports into `dir`.
///
/// Returns the paths written, in the order written.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or any export fails.
#[tracing::instrument(skip(bundle, dir), fields(dir = %dir.as_ref().display()))]
pub fn write_to_dir(bundle: &Bundle, dir: impl AsRef<Path>) -> BundleResult<Vec<PathBuf>> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir).map_err(|e| {
        BundleError::new(BundleErrorKind::FileWrite(format!("{}: {}", dir.display(), e)))
    })?;

    let mut written = vec![write_file(dir, ARCHIVE_FILE, &bundle.to_archive()?)?];
    if let Some(script) = export_script(bundle.script())? {
        written.push(write_file(dir, SCRIPT_FILE, &script)?);
    }
    if let Some(storyboard) = export_storyboard(bundle.images())? {
        written.push(write_file(dir, STORYBOARD_FILE, &storyboard)?);
    }
    if let Some(music) = bundle.music() {
        written.push(write_file(dir, MUSIC_FILE, &export_music(music)?)?);
    }
    Ok(written)
}
