//! Music genre and mood choices.

/// Genres offered for the soundtrack.
pub const MUSIC_GENRES: &[&str] = &[
    "Cinematic",
    "Trap",
    "Ambient",
    "Lo-fi",
    "Electronic",
    "Hip-Hop",
    "Pop",
    "Orchestral",
];

/// Moods offered for the soundtrack.
pub const MUSIC_MOODS: &[&str] = &[
    "Confident",
    "Motivational",
    "Calm",
    "Energetic",
    "Dramatic",
    "Uplifting",
    "Mysterious",
];
