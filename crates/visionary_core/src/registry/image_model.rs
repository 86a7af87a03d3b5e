//! Image quality tiers and their backing models.

use serde::{Deserialize, Serialize};

/// Named choice of image model, trading speed for fidelity.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use visionary_core::{ImageCallShape, QualityTier};
///
/// let tier = QualityTier::from_str("fast").unwrap();
/// assert_eq!(tier.model().id, "gemini-2.5-flash-image");
/// assert_eq!(tier.model().call_shape(), ImageCallShape::InlineContent);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum QualityTier {
    /// Best photorealism
    #[default]
    Best,
    /// Fast generation
    Fast,
    /// Professional quality, high resolution
    Artistic,
}

impl QualityTier {
    /// The model backing this tier.
    pub fn model(self) -> &'static ImageModel {
        match self {
            QualityTier::Best => &IMAGE_MODELS[0],
            QualityTier::Fast => &IMAGE_MODELS[1],
            QualityTier::Artistic => &IMAGE_MODELS[2],
        }
    }
}

/// How a model returns images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageCallShape {
    /// Content generation call returning inline image parts
    InlineContent,
    /// Dedicated image prediction call returning an image payload
    DedicatedImage,
}

/// An image-generation model and its capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageModel {
    /// Service model identifier
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Tier this model backs
    pub quality: QualityTier,
    /// Short description
    pub description: &'static str,
    /// Largest output size
    pub max_resolution: &'static str,
    /// Whether the model is a native multimodal content model
    pub native: bool,
}

impl ImageModel {
    /// The call shape is decided by the model alone, never by retry.
    pub fn call_shape(&self) -> ImageCallShape {
        if self.native {
            ImageCallShape::InlineContent
        } else {
            ImageCallShape::DedicatedImage
        }
    }
}

/// One model per tier, indexed in tier order.
pub const IMAGE_MODELS: [ImageModel; 3] = [
    ImageModel {
        id: "imagen-4.0-generate-001",
        name: "Imagen 4",
        quality: QualityTier::Best,
        description: "Best photorealism and detail",
        max_resolution: "1024x1024",
        native: false,
    },
    ImageModel {
        id: "gemini-2.5-flash-image",
        name: "Nano Banana",
        quality: QualityTier::Fast,
        description: "Fast generation, 1024px",
        max_resolution: "1024x1024",
        native: true,
    },
    ImageModel {
        id: "gemini-3-pro-image-preview",
        name: "Nano Banana Pro",
        quality: QualityTier::Artistic,
        description: "Professional quality, 4K capable",
        max_resolution: "4096x4096",
        native: true,
    },
];
