//! Prompt templates.
//!
//! Everything here is deterministic string templating over its inputs.

use visionary_core::persona_preset;
use visionary_interface::{MusicPrompt, StoryboardPrompt};

/// Camera angles cycled across scenes.
pub const CAMERA_ANGLES: [&str; 3] = ["medium shot", "close-up", "wide shot"];

/// Camera style used when the persona has no preset.
pub const DEFAULT_CAMERA_STYLE: &str = "cinematic lighting, shallow depth of field";

/// Vision prompt for the identity lock.
pub const IDENTITY_PROMPT: &str = "Forensically describe the person in this portrait in detail. \
Focus on key, consistent features like facial structure, hair style and color, eye color, and \
any distinct clothing they are wearing (e.g., 'a person with short brown hair, blue eyes, \
wearing a blue hoodie'). This will be used as an 'Identity Lock' for generating other images \
of the same person.";

/// Camera angle for a scene.
///
/// # Examples
///
/// ```
/// use visionary_models::prompt::camera_angle;
///
/// assert_eq!(camera_angle(0), "medium shot");
/// assert_eq!(camera_angle(4), "close-up");
/// ```
pub fn camera_angle(scene_index: usize) -> &'static str {
    CAMERA_ANGLES[scene_index % CAMERA_ANGLES.len()]
}

/// Camera style for a persona, falling back to [`DEFAULT_CAMERA_STYLE`].
pub fn camera_style(persona: Option<&str>) -> &'static str {
    persona
        .and_then(persona_preset)
        .map(|preset| preset.camera_style)
        .unwrap_or(DEFAULT_CAMERA_STYLE)
}

/// Script-writing prompt.
///
/// With a persona the model writes in that voice, leaning on the preset's
/// keywords when there is one. Without a persona it is framed as a
/// cinematic director.
pub fn script_prompt(topic: &str, persona: Option<&str>) -> String {
    let voice = match persona {
        Some(persona) => {
            let mut voice = format!(
                "You are a viral video scriptwriter. Your persona is a {}.",
                persona
            );
            if let Some(preset) = persona_preset(persona) {
                voice.push_str(&format!(
                    " Weave in themes like: {}.",
                    preset.script_keywords.join(", ")
                ));
            }
            voice
        }
        None => "You are a cinematic director planning a short film.".to_string(),
    };

    format!(
        "{} The topic is \"{}\". Generate a 24-second vertical video script for TikTok/Reels, \
split into three 8-second beats: The Hook, The Flow/Insight, and The Punchline. For each beat, \
provide the spoken line and a short, evocative visual prompt for an AI image generator. Also \
provide a global visual style (lighting, palette, setting) shared by all three beats so the \
frames look consistent. Return ONLY a JSON object.",
        voice, topic
    )
}

/// Storyboard prompt for one frame.
///
/// # Examples
///
/// ```
/// use visionary_interface::StoryboardPromptBuilder;
/// use visionary_models::prompt::storyboard_prompt;
///
/// let prompt = StoryboardPromptBuilder::default()
///     .scene_index(2usize)
///     .visual_prompt("sunrise over Table Mountain")
///     .identity_description("a woman with short black hair")
///     .topic("new beginnings")
///     .build()
///     .unwrap();
///
/// let text = storyboard_prompt(&prompt);
/// assert!(text.contains("wide shot"));
/// assert!(text.contains("featuring a person who is a woman with short black hair"));
/// ```
pub fn storyboard_prompt(prompt: &StoryboardPrompt) -> String {
    let mut text = format!(
        "{}. {}, {}",
        prompt.visual_prompt().trim_end_matches('.'),
        camera_angle(*prompt.scene_index()),
        camera_style(prompt.persona().as_deref())
    );

    let identity = prompt.identity_description().trim();
    if !identity.is_empty() {
        text.push_str(&format!(", featuring a person who is {}", identity));
    } else if let Some(style) = prompt.global_visual_style().as_deref() {
        text.push_str(&format!(
            ", keeping the same subject and look as the rest of the storyboard: {}",
            style
        ));
    }
    text.push('.');

    if !prompt.prop_titles().is_empty() {
        text.push_str(&format!(
            " The scene must clearly include these props: {}.",
            prompt.prop_titles().join(", ")
        ));
    }

    match prompt.persona() {
        Some(persona) => text.push_str(&format!(
            " Context: a video by a {} about \"{}\".",
            persona,
            prompt.topic()
        )),
        None => text.push_str(&format!(" Context: a video about \"{}\".", prompt.topic())),
    }

    text.push_str(" Hyper-realistic photo, dramatic. Vertical 9:16 aspect ratio.");
    text
}

/// Music prompt.
pub fn music_prompt(prompt: &MusicPrompt) -> String {
    let persona = prompt.persona().as_deref().unwrap_or("cinematic director");
    format!(
        "Generate a detailed music prompt for a 24-second soundtrack.

REQUIREMENTS:
- Persona: {}
- Genre: {}
- Mood: {}
- Topic: {}
- Emotional Direction: {}

Create a detailed music prompt that:
1. Matches the persona's vibe and style
2. Reflects the emotional direction
3. Is 24 seconds long, split into intro, build, drop and outro sections
4. Is instrumental only (no vocals)
5. Is TikTok/Reels-ready

Return ONLY a JSON object with the prompt, genre, mood, durationSeconds (24), bpmRange \
(min and max), intensity (1 to 5), structure (intro, build, drop and outro seconds summing to \
24) and a list of keywords.",
        persona,
        prompt.genre(),
        prompt.mood(),
        prompt.topic(),
        prompt.emotional_direction()
    )
}
