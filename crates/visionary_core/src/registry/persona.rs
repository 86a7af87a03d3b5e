//! Creative-voice presets.

/// Genre and mood a persona falls back to when the user picks none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MusicDefaults {
    /// Default genre
    pub genre: &'static str,
    /// Default mood
    pub mood: &'static str,
}

/// A named creative voice affecting script tone, camera style and music.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PersonaPreset {
    /// Display name, also the lookup key
    pub name: &'static str,
    /// Words the script should lean on
    pub script_keywords: &'static [&'static str],
    /// Hex colors for the persona's look
    pub color_palette: &'static [&'static str],
    /// Camera direction appended to every storyboard prompt
    pub camera_style: &'static str,
    /// Soundtrack defaults
    pub music_defaults: MusicDefaults,
}

/// Presets with full styling information.
pub const PERSONA_PRESETS: &[PersonaPreset] = &[
    PersonaPreset {
        name: "Tech Consultant",
        script_keywords: &[
            "systems thinking",
            "South Africa",
            "AI clarity",
            "innovation",
            "digital transformation",
        ],
        color_palette: &["#2563eb", "#3b82f6", "#60a5fa", "#93c5fd"],
        camera_style: "clean interview, ideal lighting, professional backdrop",
        music_defaults: MusicDefaults {
            genre: "Cinematic",
            mood: "Confident",
        },
    },
    PersonaPreset {
        name: "Cape Town Rapper",
        script_keywords: &["hustle", "Cape Town", "street smart", "authentic", "grind"],
        color_palette: &["#dc2626", "#ef4444", "#f97316", "#fbbf24"],
        camera_style: "urban street, natural lighting, dynamic angles",
        music_defaults: MusicDefaults {
            genre: "Trap",
            mood: "Confident",
        },
    },
    PersonaPreset {
        name: "Motivational Speaker",
        script_keywords: &[
            "inspiration",
            "growth mindset",
            "potential",
            "success",
            "transformation",
        ],
        color_palette: &["#7c3aed", "#8b5cf6", "#a78bfa", "#c4b5fd"],
        camera_style: "warm lighting, engaging eye contact, inspirational setting",
        music_defaults: MusicDefaults {
            genre: "Cinematic",
            mood: "Motivational",
        },
    },
    PersonaPreset {
        name: "Storyteller",
        script_keywords: &["narrative", "journey", "experience", "emotion", "connection"],
        color_palette: &["#059669", "#10b981", "#34d399", "#6ee7b7"],
        camera_style: "intimate framing, soft lighting, natural environment",
        music_defaults: MusicDefaults {
            genre: "Ambient",
            mood: "Calm",
        },
    },
    PersonaPreset {
        name: "Teacher/Educator",
        script_keywords: &["learning", "knowledge", "understanding", "education", "clarity"],
        color_palette: &["#0891b2", "#06b6d4", "#22d3ee", "#67e8f9"],
        camera_style: "clear presentation, good lighting, educational setting",
        music_defaults: MusicDefaults {
            genre: "Lo-fi",
            mood: "Calm",
        },
    },
];

/// Every persona offered to the user. The last two have no preset and use
/// the generic camera style and music defaults.
pub const PERSONAS: &[&str] = &[
    "Tech Consultant",
    "Cape Town Rapper",
    "Motivational Speaker",
    "Storyteller",
    "Teacher/Educator",
    "Stoic Philosopher",
    "Startup Hustler",
];

/// Look up a preset by exact name.
///
/// # Examples
///
/// ```
/// use visionary_core::persona_preset;
///
/// let preset = persona_preset("Storyteller").unwrap();
/// assert_eq!(preset.music_defaults.genre, "Ambient");
/// assert!(persona_preset("Stoic Philosopher").is_none());
/// ```
pub fn persona_preset(name: &str) -> Option<&'static PersonaPreset> {
    PERSONA_PRESETS.iter().find(|preset| preset.name == name)
}
