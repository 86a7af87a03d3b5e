//! Bundle aggregation.

use crate::{BundleMetadata, DeterministicArchive};
use visionary_core::{MusicSpec, PropImage, ScriptResult, StoryboardImage, extension_for_mime};
use visionary_error::{BundleError, BundleErrorKind, BundleResult, JsonError};

/// A read-only copy of a run's artifacts.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct Bundle {
    /// The script
    script: ScriptResult,
    /// Storyboard frames in scene order
    images: Vec<StoryboardImage>,
    /// Soundtrack, absent for partial bundles taken before the music phase
    music: Option<MusicSpec>,
    /// Prop photos in the order supplied
    props: Vec<PropImage>,
    /// Run metadata
    metadata: BundleMetadata,
}

/// Aggregate artifacts into a bundle.
///
/// Returns `None` when the script has no scenes or there are no images.
/// Images are copied in scene order regardless of the order given.
pub fn assemble(
    script: &ScriptResult,
    images: &[StoryboardImage],
    music: Option<&MusicSpec>,
    props: &[PropImage],
    metadata: BundleMetadata,
) -> Option<Bundle> {
    if script.scenes().is_empty() || images.is_empty() {
        tracing::debug!(
            scenes = script.scenes().len(),
            images = images.len(),
            "Not enough data to assemble a bundle"
        );
        return None;
    }

    let mut images = images.to_vec();
    images.sort_by_key(|image| *image.scene_index());

    Some(Bundle {
        script: script.clone(),
        images,
        music: music.cloned(),
        props: props.to_vec(),
        metadata,
    })
}

pub(crate) fn to_json<T: serde::Serialize>(record: &str, value: &T) -> BundleResult<Vec<u8>> {
    serde_json::to_vec_pretty(value).map_err(|e| {
        BundleError::new(BundleErrorKind::Serialization(JsonError::new(
            record,
            e.to_string(),
        )))
    })
}

impl Bundle {
    /// Export everything as one archive.
    ///
    /// Entry order: `script.json`, `scene1.png`..`sceneN.png`, `music.json`
    /// (when present), `metadata.json`, then `props/prop1.{ext}`...
    ///
    /// # Errors
    ///
    /// Returns an error if a record cannot be serialized or the archive cannot
    /// be written.
    #[tracing::instrument(skip(self), fields(images = self.images.len(), props = self.props.len()))]
    pub fn to_archive(&self) -> BundleResult<Vec<u8>> {
        let mut archive = DeterministicArchive::new();

        archive.add("script.json", &to_json("script.json", &self.script)?)?;
        for (position, image) in self.images.iter().enumerate() {
            archive.add(&format!("scene{}.png", position + 1), image.data())?;
        }
        if let Some(music) = &self.music {
            archive.add("music.json", &to_json("music.json", music)?)?;
        }
        archive.add("metadata.json", &to_json("metadata.json", &self.metadata)?)?;
        for (position, prop) in self.props.iter().enumerate() {
            let name = format!(
                "props/prop{}.{}",
                position + 1,
                extension_for_mime(prop.image().mime())
            );
            archive.add(&name, prop.image().data())?;
        }

        let bytes = archive.finish()?;
        tracing::debug!(bytes = bytes.len(), "Bundle archive written");
        Ok(bytes)
    }
}
