//! Dialogue script resource.
//!
//! The [`DialogueScript`] holds the parsed script document: the ordered
//! speaker lines plus the emoji and avatar lookup tables. It is loaded once
//! at startup from a JSON file and never mutated afterwards.
//!
//! The wire shape follows the original feed exactly, including the `emojies`
//! key spelling and the free-form `position` string that selects the avatar
//! side (case-insensitive `"right"`, anything else is left).

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Which side of the dialogue box an avatar occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AvatarSide {
    Left,
    Right,
}

impl AvatarSide {
    /// Resolve the wire `position` value. Only a case-insensitive `"right"`
    /// selects the right side; everything else (including absence) is left.
    pub fn from_wire(position: &str) -> Self {
        if position.eq_ignore_ascii_case("right") {
            AvatarSide::Right
        } else {
            AvatarSide::Left
        }
    }
}

/// One speaker line as it appears on the wire.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DialogueLine {
    pub name: String,
    pub text: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct EmojiEntry {
    pub name: String,
    pub url: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AvatarEntry {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub position: String,
}

/// Wire shape of the script document.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ScriptData {
    #[serde(default)]
    pub dialogue: Vec<DialogueLine>,
    #[serde(default)]
    pub emojies: Vec<EmojiEntry>,
    #[serde(default)]
    pub avatars: Vec<AvatarEntry>,
}

/// An avatar resolved for lookup: image url plus box side.
#[derive(Clone, Debug, PartialEq)]
pub struct AvatarInfo {
    pub url: String,
    pub side: AvatarSide,
}

/// The loaded script: ordered lines plus name-keyed emoji/avatar tables.
#[derive(Resource, Debug, Clone, Default)]
pub struct DialogueScript {
    pub lines: Vec<DialogueLine>,
    emoji: FxHashMap<String, String>,
    avatars: FxHashMap<String, AvatarInfo>,
}

impl DialogueScript {
    /// Build the lookup tables from wire data. Duplicate names keep the last
    /// occurrence.
    pub fn from_data(data: ScriptData) -> Self {
        let mut emoji = FxHashMap::default();
        for entry in data.emojies {
            emoji.insert(entry.name, entry.url);
        }
        let mut avatars = FxHashMap::default();
        for entry in data.avatars {
            avatars.insert(
                entry.name,
                AvatarInfo {
                    url: entry.url,
                    side: AvatarSide::from_wire(&entry.position),
                },
            );
        }
        DialogueScript {
            lines: data.dialogue,
            emoji,
            avatars,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let data: ScriptData = serde_json::from_str(json)?;
        Ok(Self::from_data(data))
    }

    /// Load and parse the script document at `path`.
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let file_content = std::fs::read_to_string(path)?;
        Self::from_json_str(&file_content)
    }

    pub fn line(&self, index: usize) -> Option<&DialogueLine> {
        self.lines.get(index)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Emoji image url for a token name, if the table has it.
    pub fn emoji_url(&self, name: &str) -> Option<&str> {
        self.emoji.get(name).map(String::as_str)
    }

    /// Avatar for a speaker, if the table has one.
    pub fn avatar(&self, speaker: &str) -> Option<&AvatarInfo> {
        self.avatars.get(speaker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "dialogue": [
            {"name": "Sheldon", "text": "Hi {smile}"},
            {"name": "Penny", "text": "Hey!"}
        ],
        "emojies": [
            {"name": "smile", "url": "https://example.com/smile.png"}
        ],
        "avatars": [
            {"name": "Sheldon", "url": "https://example.com/sheldon.png", "position": "left"},
            {"name": "Penny", "url": "https://example.com/penny.png", "position": "Right"}
        ]
    }"#;

    #[test]
    fn test_parse_wire_document() {
        let script = DialogueScript::from_json_str(SAMPLE).unwrap();
        assert_eq!(script.len(), 2);
        assert_eq!(script.line(0).unwrap().name, "Sheldon");
        assert_eq!(script.line(1).unwrap().text, "Hey!");
        assert_eq!(
            script.emoji_url("smile"),
            Some("https://example.com/smile.png")
        );
        assert_eq!(script.emoji_url("frown"), None);
    }

    #[test]
    fn test_avatar_side_case_insensitive() {
        let script = DialogueScript::from_json_str(SAMPLE).unwrap();
        assert_eq!(script.avatar("Sheldon").unwrap().side, AvatarSide::Left);
        // "Right" with any casing selects the right side.
        assert_eq!(script.avatar("Penny").unwrap().side, AvatarSide::Right);
        assert!(script.avatar("Leonard").is_none());
    }

    #[test]
    fn test_avatar_side_from_wire() {
        assert_eq!(AvatarSide::from_wire("right"), AvatarSide::Right);
        assert_eq!(AvatarSide::from_wire("RIGHT"), AvatarSide::Right);
        assert_eq!(AvatarSide::from_wire("left"), AvatarSide::Left);
        // Unknown values fall back to left.
        assert_eq!(AvatarSide::from_wire("center"), AvatarSide::Left);
        assert_eq!(AvatarSide::from_wire(""), AvatarSide::Left);
    }

    #[test]
    fn test_missing_position_defaults_left() {
        let json = r#"{
            "dialogue": [],
            "avatars": [{"name": "A", "url": "u"}]
        }"#;
        let script = DialogueScript::from_json_str(json).unwrap();
        assert_eq!(script.avatar("A").unwrap().side, AvatarSide::Left);
    }

    #[test]
    fn test_duplicate_names_keep_last() {
        let json = r#"{
            "dialogue": [],
            "emojies": [
                {"name": "smile", "url": "first"},
                {"name": "smile", "url": "second"}
            ]
        }"#;
        let script = DialogueScript::from_json_str(json).unwrap();
        assert_eq!(script.emoji_url("smile"), Some("second"));
    }

    #[test]
    fn test_empty_document() {
        let script = DialogueScript::from_json_str("{}").unwrap();
        assert!(script.is_empty());
        assert_eq!(script.line(0), None);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(DialogueScript::from_json_str("not json").is_err());
    }
}
