//! Definition normalization for upstream dictionary payloads.
//!
//! The upstream API returns loosely structured JSON: a single entry object
//! or an array of them, where any field may be absent or of the wrong type.
//! This module maps that payload to a fixed three-field shape with one
//! rule: first entry, first meaning, first definition, nothing else
//! considered. The precedence is part of the observable contract and must
//! not be extended to aggregate further meanings.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Normalized lookup result returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionResult {
    pub word: String,
    #[serde(rename = "partOfSpeech")]
    pub part_of_speech: Option<String>,
    pub definition: String,
}

/// Why no result could be produced.
///
/// The two variants map to distinct 404 messages at the HTTP boundary,
/// so they must stay separate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    /// No candidate entry could be selected from the payload.
    #[error("no entry in upstream payload")]
    NoEntry,

    /// A candidate entry exists but yields no non-empty definition text.
    #[error("entry has no usable definition")]
    NoDefinition,
}

/// Map a raw upstream payload to a [`DefinitionResult`].
///
/// An array payload contributes its first element; a single value stands
/// for itself; null and empty payloads fail with [`NormalizeError::NoEntry`].
/// From the candidate entry only the first meaning and its first definition
/// are considered. `word` falls back to `fallback_word` when the entry
/// carries no non-empty word field. A successful result always has
/// non-empty definition text.
pub fn normalize(raw: &Value, fallback_word: &str) -> Result<DefinitionResult, NormalizeError> {
    let entry = candidate_entry(raw).ok_or(NormalizeError::NoEntry)?;

    let first_meaning = entry
        .get("meanings")
        .and_then(Value::as_array)
        .and_then(|meanings| meanings.first());
    let first_def = first_meaning
        .and_then(|meaning| meaning.get("definitions"))
        .and_then(Value::as_array)
        .and_then(|defs| defs.first());

    let word = entry
        .get("word")
        .and_then(Value::as_str)
        .filter(|word| !word.is_empty())
        .unwrap_or(fallback_word)
        .to_string();
    let part_of_speech = first_meaning
        .and_then(|meaning| meaning.get("partOfSpeech"))
        .and_then(Value::as_str)
        .map(str::to_string);
    let definition = first_def
        .and_then(|def| def.get("definition"))
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .ok_or(NormalizeError::NoDefinition)?
        .to_string();

    Ok(DefinitionResult {
        word,
        part_of_speech,
        definition,
    })
}

/// Select the candidate entry from the payload, if any.
fn candidate_entry(raw: &Value) -> Option<&Value> {
    match raw {
        Value::Array(items) => items.first(),
        Value::Null => None,
        Value::String(text) if text.is_empty() => None,
        other => Some(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_entry() -> Value {
        json!({
            "word": "hello",
            "meanings": [
                {
                    "partOfSpeech": "exclamation",
                    "definitions": [
                        { "definition": "used as a greeting", "example": "hello there" },
                        { "definition": "a second definition that must be ignored" }
                    ]
                },
                { "partOfSpeech": "noun", "definitions": [{ "definition": "ignored too" }] }
            ]
        })
    }

    #[test]
    fn test_array_payload_takes_first_entry() {
        let raw = json!([full_entry(), { "word": "other" }]);
        let result = normalize(&raw, "hello").unwrap();
        assert_eq!(result.word, "hello");
        assert_eq!(result.part_of_speech.as_deref(), Some("exclamation"));
        assert_eq!(result.definition, "used as a greeting");
    }

    #[test]
    fn test_single_object_payload() {
        let result = normalize(&full_entry(), "hello").unwrap();
        assert_eq!(result.definition, "used as a greeting");
    }

    #[test]
    fn test_only_first_meaning_considered() {
        let result = normalize(&full_entry(), "hello").unwrap();
        assert_eq!(result.part_of_speech.as_deref(), Some("exclamation"));
        assert_ne!(result.definition, "ignored too");
    }

    #[test]
    fn test_null_payload_is_no_entry() {
        assert_eq!(normalize(&Value::Null, "x"), Err(NormalizeError::NoEntry));
    }

    #[test]
    fn test_empty_array_is_no_entry() {
        assert_eq!(normalize(&json!([]), "x"), Err(NormalizeError::NoEntry));
    }

    #[test]
    fn test_empty_string_payload_is_no_entry() {
        assert_eq!(normalize(&json!(""), "x"), Err(NormalizeError::NoEntry));
    }

    #[test]
    fn test_missing_meanings_is_no_definition() {
        let raw = json!({ "word": "hello" });
        assert_eq!(normalize(&raw, "hello"), Err(NormalizeError::NoDefinition));
    }

    #[test]
    fn test_empty_meanings_is_no_definition() {
        let raw = json!({ "word": "hello", "meanings": [] });
        assert_eq!(normalize(&raw, "hello"), Err(NormalizeError::NoDefinition));
    }

    #[test]
    fn test_meanings_wrong_type_is_no_definition() {
        let raw = json!({ "word": "hello", "meanings": "oops" });
        assert_eq!(normalize(&raw, "hello"), Err(NormalizeError::NoDefinition));
    }

    #[test]
    fn test_empty_definitions_is_no_definition() {
        let raw = json!({
            "word": "hello",
            "meanings": [{ "partOfSpeech": "noun", "definitions": [] }]
        });
        assert_eq!(normalize(&raw, "hello"), Err(NormalizeError::NoDefinition));
    }

    #[test]
    fn test_empty_definition_text_is_no_definition() {
        let raw = json!({
            "word": "hello",
            "meanings": [{ "partOfSpeech": "noun", "definitions": [{ "definition": "" }] }]
        });
        assert_eq!(normalize(&raw, "hello"), Err(NormalizeError::NoDefinition));
    }

    #[test]
    fn test_non_object_entry_is_no_definition() {
        // A truthy scalar passes entry selection but yields nothing usable
        let raw = json!(["surprise"]);
        assert_eq!(normalize(&raw, "x"), Err(NormalizeError::NoDefinition));
    }

    #[test]
    fn test_missing_word_falls_back_to_query() {
        let raw = json!([{
            "meanings": [{ "partOfSpeech": "noun", "definitions": [{ "definition": "a thing" }] }]
        }]);
        let result = normalize(&raw, "gadget").unwrap();
        assert_eq!(result.word, "gadget");
    }

    #[test]
    fn test_empty_word_falls_back_to_query() {
        let raw = json!([{
            "word": "",
            "meanings": [{ "definitions": [{ "definition": "a thing" }] }]
        }]);
        let result = normalize(&raw, "gadget").unwrap();
        assert_eq!(result.word, "gadget");
        assert_eq!(result.part_of_speech, None);
    }

    #[test]
    fn test_missing_part_of_speech_is_absent() {
        let raw = json!([{
            "word": "widget",
            "meanings": [{ "definitions": [{ "definition": "a small device" }] }]
        }]);
        let result = normalize(&raw, "widget").unwrap();
        assert_eq!(result.part_of_speech, None);
        assert_eq!(result.definition, "a small device");
    }

    #[test]
    fn test_result_serializes_with_camel_case_field() {
        let result = normalize(&full_entry(), "hello").unwrap();
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["partOfSpeech"], "exclamation");
        assert_eq!(value["word"], "hello");
        assert_eq!(value["definition"], "used as a greeting");
    }
}
