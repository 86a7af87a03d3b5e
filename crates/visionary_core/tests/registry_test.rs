//! Tests for the static persona and model tables.

use std::str::FromStr;
use strum::IntoEnumIterator;
use visionary_core::registry::{IMAGE_MODELS, MUSIC_GENRES, MUSIC_MOODS, PERSONA_PRESETS, PERSONAS};
use visionary_core::{ImageCallShape, QualityTier, persona_preset};

#[test]
fn every_preset_is_an_offered_persona() {
    for preset in PERSONA_PRESETS {
        assert!(PERSONAS.contains(&preset.name), "{} not offered", preset.name);
        assert!(!preset.script_keywords.is_empty());
        assert_eq!(preset.color_palette.len(), 4);
    }
}

#[test]
fn preset_music_defaults_are_selectable() {
    for preset in PERSONA_PRESETS {
        assert!(MUSIC_GENRES.contains(&preset.music_defaults.genre));
        assert!(MUSIC_MOODS.contains(&preset.music_defaults.mood));
    }
}

#[test]
fn preset_lookup_is_exact() {
    assert_eq!(
        persona_preset("Cape Town Rapper").map(|p| p.camera_style),
        Some("urban street, natural lighting, dynamic angles")
    );
    assert!(persona_preset("cape town rapper").is_none());
    assert!(persona_preset("Startup Hustler").is_none());
}

#[test]
fn each_tier_maps_to_its_own_model() {
    for tier in QualityTier::iter() {
        assert_eq!(tier.model().quality, tier);
    }
    assert_eq!(IMAGE_MODELS.len(), QualityTier::iter().count());
}

#[test]
fn call_shape_follows_model_kind() {
    assert_eq!(
        QualityTier::Best.model().call_shape(),
        ImageCallShape::DedicatedImage
    );
    assert_eq!(
        QualityTier::Artistic.model().call_shape(),
        ImageCallShape::InlineContent
    );
}

#[test]
fn tier_names_round_trip_through_strings() -> Result<(), strum::ParseError> {
    assert_eq!(QualityTier::default(), QualityTier::Best);
    assert_eq!(QualityTier::from_str("artistic")?, QualityTier::Artistic);
    assert_eq!(QualityTier::Fast.to_string(), "fast");
    assert!(QualityTier::from_str("ultra").is_err());
    Ok(())
}

#[test]
fn tier_serializes_lowercase() {
    let json = serde_json::to_string(&QualityTier::Artistic).unwrap();
    assert_eq!(json, "\"artistic\"");
}
