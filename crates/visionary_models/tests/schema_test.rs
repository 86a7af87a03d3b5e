//! Strict decoding of structured responses.

use visionary_error::GenerationErrorKind;
use visionary_models::schema::{decode_music, decode_script, music_schema, script_schema};

const VALID_SCRIPT: &str = r#"{
    "scenes": [
        {"beat": "The Hook", "script": "Your job is changing.", "visual_prompt": "office at dawn"},
        {"beat": "The Flow", "script": "Skills beat titles.", "visual_prompt": "hands on keyboard"},
        {"beat": "The Punchline", "script": "Start today.", "visual_prompt": "door opening to light"}
    ],
    "global_visual_style": "warm amber tones"
}"#;

const VALID_MUSIC: &str = r#"{
    "prompt": "Uplifting cinematic strings with a steady pulse",
    "genre": "Cinematic",
    "mood": "Confident",
    "durationSeconds": 24,
    "bpmRange": {"min": 90, "max": 110},
    "intensity": 4,
    "structure": {"intro": 4, "build": 8, "drop": 8, "outro": 4},
    "keywords": ["strings", "pulse", "rise"]
}"#;

fn is_malformed<T: std::fmt::Debug>(result: visionary_error::GenerationResult<T>) -> bool {
    matches!(
        result.unwrap_err().kind,
        GenerationErrorKind::MalformedResponse(_)
    )
}

#[test]
fn test_valid_script_decodes() -> anyhow::Result<()> {
    let script = decode_script(VALID_SCRIPT)?;
    assert_eq!(script.scenes().len(), 3);
    assert_eq!(script.scenes()[2].visual_prompt(), "door opening to light");
    assert_eq!(script.global_visual_style(), Some("warm amber tones"));
    assert_eq!(script.opening_line(), "Your job is changing.");
    Ok(())
}

#[test]
fn test_global_style_is_optional() -> anyhow::Result<()> {
    let text = VALID_SCRIPT.replace(",\n    \"global_visual_style\": \"warm amber tones\"", "");
    let script = decode_script(&text)?;
    assert_eq!(script.global_visual_style(), None);
    Ok(())
}

#[test]
fn test_script_with_two_scenes_is_rejected() {
    let text = r#"{"scenes":[
        {"beat":"a","script":"b","visual_prompt":"c"},
        {"beat":"a","script":"b","visual_prompt":"c"}]}"#;
    assert!(is_malformed(decode_script(text)));
}

#[test]
fn test_script_with_extra_field_is_rejected() {
    let text = VALID_SCRIPT.replace("\"global_visual_style\"", "\"mood\": \"x\", \"global_visual_style\"");
    assert!(is_malformed(decode_script(&text)));
}

#[test]
fn test_scene_with_extra_field_is_rejected() {
    let text = VALID_SCRIPT.replace(
        "\"visual_prompt\": \"office at dawn\"",
        "\"visual_prompt\": \"office at dawn\", \"duration\": 8",
    );
    assert!(is_malformed(decode_script(&text)));
}

#[test]
fn test_scene_missing_field_is_rejected() {
    let text = VALID_SCRIPT.replace("\"script\": \"Start today.\", ", "");
    assert!(is_malformed(decode_script(&text)));
}

#[test]
fn test_blank_scene_field_is_rejected() {
    let text = VALID_SCRIPT.replace("Skills beat titles.", "   ");
    assert!(is_malformed(decode_script(&text)));
}

#[test]
fn test_non_json_script_is_rejected() {
    assert!(is_malformed(decode_script("Sure! Here is your script:")));
}

#[test]
fn test_valid_music_decodes() -> anyhow::Result<()> {
    let music = decode_music(VALID_MUSIC)?;
    assert_eq!(music.duration_seconds, 24);
    assert_eq!(music.structure.total(), Some(24));
    assert_eq!(music.keywords, vec!["strings", "pulse", "rise"]);
    Ok(())
}

#[test]
fn test_music_structure_must_sum_to_duration() {
    let text = VALID_MUSIC.replace("\"outro\": 4", "\"outro\": 6");
    assert!(is_malformed(decode_music(&text)));
}

#[test]
fn test_music_structure_overflow_is_rejected() {
    // u32::MAX + 25 wraps to exactly the duration
    let text = VALID_MUSIC.replace(
        "\"intro\": 4, \"build\": 8, \"drop\": 8, \"outro\": 4",
        "\"intro\": 4294967295, \"build\": 25, \"drop\": 0, \"outro\": 0",
    );
    assert!(is_malformed(decode_music(&text)));
}

#[test]
fn test_music_intensity_out_of_range_is_rejected() {
    let text = VALID_MUSIC.replace("\"intensity\": 4", "\"intensity\": 9");
    assert!(is_malformed(decode_music(&text)));
}

#[test]
fn test_music_inverted_bpm_is_rejected() {
    let text = VALID_MUSIC.replace("\"min\": 90, \"max\": 110", "\"min\": 120, \"max\": 100");
    assert!(is_malformed(decode_music(&text)));
}

#[test]
fn test_music_wrong_duration_is_rejected() {
    let text = VALID_MUSIC.replace("\"durationSeconds\": 24", "\"durationSeconds\": 30");
    assert!(is_malformed(decode_music(&text)));
}

#[test]
fn test_music_legacy_string_duration_is_rejected() {
    let text = VALID_MUSIC.replace("\"durationSeconds\": 24", "\"duration\": \"24s\"");
    assert!(is_malformed(decode_music(&text)));
}

#[test]
fn test_schemas_require_every_decoded_field() {
    let script = script_schema();
    assert_eq!(script["properties"]["scenes"]["maxItems"], 3);

    let music = music_schema();
    let required = music["required"].as_array().unwrap();
    assert_eq!(required.len(), 8);
}
