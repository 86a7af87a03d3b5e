//! Response schemas and strict decoding.
//!
//! Structured responses are decoded into wire records that reject unknown
//! fields, then validated. Any violation is a malformed-response error; no
//! response is partially accepted.

use serde::Deserialize;
use serde_json::{Value, json};
use visionary_core::{
    BpmRange, MusicSpec, MusicStructure, SCENE_COUNT, Scene, ScriptResult,
};
use visionary_error::{GenerationError, GenerationResult};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ScriptPayload {
    scenes: Vec<ScenePayload>,
    #[serde(default)]
    global_visual_style: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ScenePayload {
    beat: String,
    script: String,
    visual_prompt: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct MusicPayload {
    prompt: String,
    genre: String,
    mood: String,
    duration_seconds: u32,
    bpm_range: BpmPayload,
    intensity: u8,
    structure: StructurePayload,
    keywords: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BpmPayload {
    min: u32,
    max: u32,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct StructurePayload {
    intro: u32,
    build: u32,
    drop: u32,
    outro: u32,
}

/// Response schema sent with the script request.
pub fn script_schema() -> Value {
    let string = json!({ "type": "STRING" });
    json!({
        "type": "OBJECT",
        "properties": {
            "scenes": {
                "type": "ARRAY",
                "minItems": SCENE_COUNT,
                "maxItems": SCENE_COUNT,
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "beat": string,
                        "script": string,
                        "visual_prompt": string,
                    },
                    "required": ["beat", "script", "visual_prompt"],
                },
            },
            "global_visual_style": string,
        },
        "required": ["scenes"],
    })
}

/// Response schema sent with the music request.
pub fn music_schema() -> Value {
    let integer = json!({ "type": "INTEGER" });
    json!({
        "type": "OBJECT",
        "properties": {
            "prompt": { "type": "STRING" },
            "genre": { "type": "STRING" },
            "mood": { "type": "STRING" },
            "durationSeconds": integer,
            "bpmRange": {
                "type": "OBJECT",
                "properties": { "min": integer, "max": integer },
                "required": ["min", "max"],
            },
            "intensity": integer,
            "structure": {
                "type": "OBJECT",
                "properties": {
                    "intro": integer,
                    "build": integer,
                    "drop": integer,
                    "outro": integer,
                },
                "required": ["intro", "build", "drop", "outro"],
            },
            "keywords": { "type": "ARRAY", "items": { "type": "STRING" } },
        },
        "required": [
            "prompt", "genre", "mood", "durationSeconds", "bpmRange",
            "intensity", "structure", "keywords",
        ],
    })
}

fn non_empty(field: &str, value: String) -> GenerationResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(GenerationError::malformed(format!("{} is empty", field)));
    }
    Ok(trimmed.to_string())
}

/// Decode a script response.
///
/// # Errors
///
/// Fails on invalid JSON, unknown or missing fields, a scene count other than
/// three, or an empty scene field.
///
/// # Examples
///
/// ```
/// use visionary_models::schema::decode_script;
///
/// let text = r#"{"scenes":[
///     {"beat":"Hook","script":"a","visual_prompt":"x"},
///     {"beat":"Flow","script":"b","visual_prompt":"y"},
///     {"beat":"Punchline","script":"c","visual_prompt":"z"}]}"#;
/// let script = decode_script(text).unwrap();
/// assert_eq!(script.opening_line(), "a");
///
/// assert!(decode_script(r#"{"scenes":[]}"#).is_err());
/// ```
pub fn decode_script(text: &str) -> GenerationResult<ScriptResult> {
    let payload: ScriptPayload = serde_json::from_str(text.trim())
        .map_err(|e| GenerationError::malformed(format!("script: {}", e)))?;

    if payload.scenes.len() != SCENE_COUNT {
        return Err(GenerationError::malformed(format!(
            "expected {} scenes, got {}",
            SCENE_COUNT,
            payload.scenes.len()
        )));
    }

    let scenes = payload
        .scenes
        .into_iter()
        .map(|scene| {
            Ok(Scene::new(
                non_empty("beat", scene.beat)?,
                non_empty("script", scene.script)?,
                non_empty("visual_prompt", scene.visual_prompt)?,
            ))
        })
        .collect::<GenerationResult<Vec<_>>>()?;

    let style = payload
        .global_visual_style
        .map(|style| style.trim().to_string())
        .filter(|style| !style.is_empty());

    Ok(ScriptResult::new(scenes, style))
}

/// Decode a music response.
///
/// # Errors
///
/// Fails on invalid JSON, unknown or missing fields, or a spec that breaks the
/// duration, intensity, tempo or structure invariants.
pub fn decode_music(text: &str) -> GenerationResult<MusicSpec> {
    let payload: MusicPayload = serde_json::from_str(text.trim())
        .map_err(|e| GenerationError::malformed(format!("music: {}", e)))?;

    let spec = MusicSpec {
        prompt: non_empty("prompt", payload.prompt)?,
        genre: non_empty("genre", payload.genre)?,
        mood: non_empty("mood", payload.mood)?,
        duration_seconds: payload.duration_seconds,
        bpm_range: BpmRange {
            min: payload.bpm_range.min,
            max: payload.bpm_range.max,
        },
        intensity: payload.intensity,
        structure: MusicStructure {
            intro: payload.structure.intro,
            build: payload.structure.build,
            drop: payload.structure.drop,
            outro: payload.structure.outro,
        },
        keywords: payload.keywords,
    };

    spec.validate().map_err(GenerationError::malformed)?;
    Ok(spec)
}
