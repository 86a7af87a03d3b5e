//! Soundtrack description produced by the music phase.

use serde::{Deserialize, Serialize};

/// Every soundtrack matches the 24 second script.
pub const MUSIC_DURATION_SECONDS: u32 = 24;

/// Tempo window in beats per minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BpmRange {
    /// Lower bound
    pub min: u32,
    /// Upper bound
    pub max: u32,
}

/// Section lengths in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MusicStructure {
    /// Intro length
    pub intro: u32,
    /// Build-up length
    pub build: u32,
    /// Drop length
    pub drop: u32,
    /// Outro length
    pub outro: u32,
}

impl MusicStructure {
    /// Sum of all sections, `None` if it does not fit in a `u32`.
    pub fn total(&self) -> Option<u32> {
        self.intro
            .checked_add(self.build)?
            .checked_add(self.drop)?
            .checked_add(self.outro)
    }
}

/// A music prompt plus the parameters a music model needs.
///
/// # Examples
///
/// ```
/// use visionary_core::{BpmRange, MusicSpec, MusicStructure};
///
/// let spec = MusicSpec {
///     prompt: "warm lo-fi keys".to_string(),
///     genre: "Lo-fi".to_string(),
///     mood: "Calm".to_string(),
///     duration_seconds: 24,
///     bpm_range: BpmRange { min: 70, max: 85 },
///     intensity: 2,
///     structure: MusicStructure { intro: 4, build: 8, drop: 8, outro: 4 },
///     keywords: vec!["vinyl".to_string()],
/// };
/// assert!(spec.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicSpec {
    /// Free-text prompt for a music generator
    pub prompt: String,
    /// Genre
    pub genre: String,
    /// Mood
    pub mood: String,
    /// Track length, always [`MUSIC_DURATION_SECONDS`]
    pub duration_seconds: u32,
    /// Tempo window
    pub bpm_range: BpmRange,
    /// Energy level, 1 through 5
    pub intensity: u8,
    /// Section timing
    pub structure: MusicStructure,
    /// Ordered descriptive keywords
    pub keywords: Vec<String>,
}

impl MusicSpec {
    /// Check the invariants a decoded spec must satisfy.
    ///
    /// # Errors
    ///
    /// Returns a description of the first violated invariant.
    pub fn validate(&self) -> Result<(), String> {
        if self.duration_seconds != MUSIC_DURATION_SECONDS {
            return Err(format!(
                "duration must be {}s, got {}s",
                MUSIC_DURATION_SECONDS, self.duration_seconds
            ));
        }
        if !(1..=5).contains(&self.intensity) {
            return Err(format!("intensity must be in 1..=5, got {}", self.intensity));
        }
        if self.bpm_range.min == 0 || self.bpm_range.min > self.bpm_range.max {
            return Err(format!(
                "invalid bpm range {}..{}",
                self.bpm_range.min, self.bpm_range.max
            ));
        }
        match self.structure.total() {
            Some(total) if total == self.duration_seconds => {}
            Some(total) => {
                return Err(format!(
                    "structure sums to {}s, expected {}s",
                    total, self.duration_seconds
                ));
            }
            None => return Err("structure sections overflow".to_string()),
        }
        Ok(())
    }
}
