//! Script records returned by the text model.

use serde::{Deserialize, Serialize};

/// Number of beats in every script: hook, flow, punchline.
pub const SCENE_COUNT: usize = 3;

/// One 8-second beat of the script.
///
/// # Examples
///
/// ```
/// use visionary_core::Scene;
///
/// let scene = Scene::new("The Hook", "What if your job vanished?", "empty office at dawn");
/// assert_eq!(scene.beat(), "The Hook");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scene {
    /// Beat name (hook, flow, punchline)
    beat: String,
    /// Spoken line
    script: String,
    /// Prompt for the image model
    visual_prompt: String,
}

impl Scene {
    /// Create a scene.
    pub fn new(
        beat: impl Into<String>,
        script: impl Into<String>,
        visual_prompt: impl Into<String>,
    ) -> Self {
        Self {
            beat: beat.into(),
            script: script.into(),
            visual_prompt: visual_prompt.into(),
        }
    }

    /// Beat name.
    pub fn beat(&self) -> &str {
        &self.beat
    }

    /// Spoken line.
    pub fn script(&self) -> &str {
        &self.script
    }

    /// Prompt for the image model.
    pub fn visual_prompt(&self) -> &str {
        &self.visual_prompt
    }
}

/// A decoded script: exactly [`SCENE_COUNT`] scenes plus an optional style
/// descriptor shared by every frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptResult {
    scenes: Vec<Scene>,
    global_visual_style: Option<String>,
}

impl ScriptResult {
    /// Build a script result. Callers decode and validate before constructing.
    pub fn new(scenes: Vec<Scene>, global_visual_style: Option<String>) -> Self {
        Self {
            scenes,
            global_visual_style,
        }
    }

    /// Scenes in beat order.
    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    /// Shared style descriptor, if the model supplied one.
    pub fn global_visual_style(&self) -> Option<&str> {
        self.global_visual_style.as_deref()
    }

    /// The opening spoken line, used to seed the music's emotional direction.
    pub fn opening_line(&self) -> &str {
        self.scenes.first().map(Scene::script).unwrap_or_default()
    }
}
