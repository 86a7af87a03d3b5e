//! Registry listings.

use visionary_core::registry::{IMAGE_MODELS, MUSIC_GENRES, MUSIC_MOODS, PERSONAS, persona_preset};

/// Print every persona, with presets where one exists.
pub fn list_personas() {
    for name in PERSONAS {
        match persona_preset(name) {
            Some(preset) => {
                println!("{}", name);
                println!("  keywords: {}", preset.script_keywords.join(", "));
                println!("  palette:  {}", preset.color_palette.join(" "));
                println!("  camera:   {}", preset.camera_style);
                println!(
                    "  music:    {} / {}",
                    preset.music_defaults.genre, preset.music_defaults.mood
                );
            }
            None => println!("{}", name),
        }
    }
    println!();
    println!("Genres: {}", MUSIC_GENRES.join(", "));
    println!("Moods:  {}", MUSIC_MOODS.join(", "));
}

/// Print the image models behind each quality tier.
pub fn list_models() {
    for model in IMAGE_MODELS.iter() {
        println!(
            "{:<9} {} ({}, up to {})",
            model.quality.to_string(),
            model.name,
            model.id,
            model.max_resolution
        );
        println!("          {}", model.description);
    }
}
