//! Binary media records: reference photos, prop photos and rendered frames.

use serde::{Deserialize, Serialize};
use std::path::Path;
use visionary_error::{ValidationError, ValidationErrorKind};

/// A user-supplied photo used for the identity lock.
///
/// Construction validates that the MIME type is `image/*`; the generation
/// client relies on that and does not check again.
///
/// # Examples
///
/// ```
/// use visionary_core::ReferenceImage;
///
/// assert!(ReferenceImage::new("image/jpeg", vec![0xFF, 0xD8]).is_ok());
/// assert!(ReferenceImage::new("application/pdf", vec![0x25]).is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(try_from = "UncheckedImage")]
pub struct ReferenceImage {
    /// MIME type, always `image/*`
    mime: String,
    /// Encoded image bytes
    data: Vec<u8>,
}

impl ReferenceImage {
    /// Wrap image bytes, rejecting non-image MIME types.
    #[track_caller]
    pub fn new(mime: impl Into<String>, data: Vec<u8>) -> Result<Self, ValidationError> {
        let mime = mime.into();
        if !mime.starts_with("image/") {
            return Err(ValidationError::new(ValidationErrorKind::NotAnImage(mime)));
        }
        Ok(Self { mime, data })
    }

    /// Read an image from disk, guessing the MIME type from the extension.
    #[track_caller]
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ValidationError> {
        let path = path.as_ref();
        let mime = mime_for_path(path).ok_or_else(|| {
            ValidationError::new(ValidationErrorKind::NotAnImage(path.display().to_string()))
        })?;
        let data = std::fs::read(path).map_err(|e| {
            ValidationError::new(ValidationErrorKind::UnreadableFile(format!(
                "{}: {}",
                path.display(),
                e
            )))
        })?;
        Self::new(mime, data)
    }
}

#[derive(Deserialize)]
struct UncheckedImage {
    mime: String,
    data: Vec<u8>,
}

impl TryFrom<UncheckedImage> for ReferenceImage {
    type Error = ValidationError;

    fn try_from(image: UncheckedImage) -> Result<Self, Self::Error> {
        Self::new(image.mime, image.data)
    }
}

impl std::fmt::Debug for ReferenceImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReferenceImage")
            .field("mime", &self.mime)
            .field("bytes", &self.data.len())
            .finish()
    }
}

/// A titled prop photo the storyboard should feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct PropImage {
    /// Short title used in the storyboard prompt
    title: String,
    /// The prop photo itself
    image: ReferenceImage,
}

impl PropImage {
    /// Create a prop from a title and a validated image.
    pub fn new(title: impl Into<String>, image: ReferenceImage) -> Self {
        Self {
            title: title.into(),
            image,
        }
    }
}

/// One rendered storyboard frame.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct StoryboardImage {
    /// Zero-based index of the scene this frame illustrates
    scene_index: usize,
    /// MIME type reported by the service
    mime: String,
    /// Encoded image bytes
    data: Vec<u8>,
}

impl StoryboardImage {
    /// Create a frame for the given scene.
    pub fn new(scene_index: usize, mime: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            scene_index,
            mime: mime.into(),
            data,
        }
    }
}

impl std::fmt::Debug for StoryboardImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoryboardImage")
            .field("scene_index", &self.scene_index)
            .field("mime", &self.mime)
            .field("bytes", &self.data.len())
            .finish()
    }
}

/// Guess an image MIME type from a file extension.
///
/// Returns `None` for anything that is not a recognised image extension.
pub fn mime_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        "heic" => Some("image/heic"),
        "heif" => Some("image/heif"),
        _ => None,
    }
}

/// File extension for an image MIME type, `bin` when unknown.
pub fn extension_for_mime(mime: &str) -> &'static str {
    match mime {
        "image/png" => "png",
        "image/jpeg" => "jpg",
        "image/webp" => "webp",
        "image/gif" => "gif",
        "image/heic" => "heic",
        "image/heif" => "heif",
        _ => "bin",
    }
}
