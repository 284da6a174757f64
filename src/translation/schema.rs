//! The response contract handed to the model, and typed views of a reply.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// JSON schema (Gemini `responseSchema` dialect) constraining generated output.
pub fn response_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "text": { "type": "string" },
            "translation": { "type": "string" },
            "vocabulary": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "text": { "type": "string" },
                        "pronunciation": { "type": "string" },
                        "definitions": {
                            "type": "array",
                            "items": {
                                "type": "object",
                                "properties": {
                                    "definition": { "type": "string" },
                                    "type": { "type": "string" },
                                    "examples": {
                                        "type": "array",
                                        "items": { "type": "string" }
                                    }
                                },
                                "required": ["definition"]
                            }
                        }
                    },
                    "required": ["text", "definitions", "pronunciation"]
                }
            }
        },
        "required": ["text", "translation"]
    })
}

/// A parsed translation reply.
///
/// `translation` is optional because single-word input is answered with
/// vocabulary senses only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
    #[serde(default)]
    pub vocabulary: Vec<VocabularyEntry>,
}

/// One word or phrase with its pronunciation and senses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub text: String,
    #[serde(default)]
    pub pronunciation: String,
    #[serde(default)]
    pub definitions: Vec<Definition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    pub definition: String,
    /// Part-of-speech tag such as `n.` or `vi.`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<String>,
    #[serde(default)]
    pub examples: Vec<String>,
}

impl TranslationResult {
    /// Parses a raw reply payload.
    pub fn parse(payload: &str) -> serde_json::Result<Self> {
        serde_json::from_str(payload)
    }

    /// Returns the translation unless it is absent or blank.
    pub fn translation(&self) -> Option<&str> {
        self.translation
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const EXAMPLE_REPLY: &str = r#"{
        "text": "He parked behind his house.",
        "translation": "他把车子停放在房子后面。",
        "vocabulary": [
            {
                "text": "park",
                "pronunciation": "pɑːk",
                "definitions": [
                    {"definition": "停车", "type": "vi.", "examples": ["He parked behind his house."]},
                    {"definition": "公园", "type": "n."}
                ]
            }
        ]
    }"#;

    #[test]
    fn test_schema_required_fields() {
        let schema = response_schema();
        assert_eq!(schema["required"], json!(["text", "translation"]));

        let entry = &schema["properties"]["vocabulary"]["items"];
        assert_eq!(
            entry["required"],
            json!(["text", "definitions", "pronunciation"])
        );

        let definition = &entry["properties"]["definitions"]["items"];
        assert_eq!(definition["required"], json!(["definition"]));
        assert_eq!(definition["properties"]["examples"]["items"]["type"], "string");
    }

    #[test]
    fn test_parse_full_reply() {
        let result = TranslationResult::parse(EXAMPLE_REPLY).unwrap();

        assert_eq!(result.text, "He parked behind his house.");
        assert_eq!(result.translation(), Some("他把车子停放在房子后面。"));
        assert_eq!(result.vocabulary.len(), 1);

        let park = &result.vocabulary[0];
        assert_eq!(park.pronunciation, "pɑːk");
        assert_eq!(park.definitions.len(), 2);
        assert_eq!(park.definitions[0].part_of_speech.as_deref(), Some("vi."));
        assert_eq!(park.definitions[0].examples.len(), 1);
        assert!(park.definitions[1].examples.is_empty());
    }

    #[test]
    fn test_parse_single_word_reply_without_translation() {
        let payload = r#"{"text":"dog","vocabulary":[{"text":"dog","pronunciation":"dɒɡ","definitions":[{"definition":"狗","type":"n."}]}]}"#;
        let result = TranslationResult::parse(payload).unwrap();

        assert!(result.translation().is_none());
        assert_eq!(result.vocabulary[0].definitions[0].definition, "狗");
    }

    #[test]
    fn test_blank_translation_is_none() {
        let result = TranslationResult::parse(r#"{"text":"x","translation":"  "}"#).unwrap();
        assert!(result.translation().is_none());
        assert!(result.vocabulary.is_empty());
    }

    #[test]
    fn test_parse_rejects_non_json() {
        assert!(TranslationResult::parse("sorry, I cannot help").is_err());
        assert!(TranslationResult::parse(r#"{"translation":"no text field"}"#).is_err());
    }
}
