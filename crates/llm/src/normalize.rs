//! Turns raw model output into validated flashcards.
//!
//! Model output is untrusted free text: tolerant of formatting quirks
//! (markdown code fences) but strict about the final structure, since
//! downstream rendering assumes well-formed cards.

use cardbox_core::Flashcard;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    /// The (fence-stripped) text is not valid JSON. Carries the original
    /// raw text for server-side diagnostics.
    #[error("model output is not valid JSON: {reason}")]
    Parse { reason: String, raw: String },
    /// Valid JSON, but neither a card array nor an object with a
    /// `flashcards` array.
    #[error("unexpected JSON shape: {0}")]
    Structure(String),
    /// Every candidate entry was dropped by field validation.
    #[error("no valid flashcards after filtering")]
    Empty,
}

/// Normalize raw model text into a non-empty, ordered card sequence.
///
/// Accepts either a bare array of candidate objects or an object with a
/// `flashcards` key holding one. Entries missing a non-empty string
/// `question` or `answer` are silently dropped.
pub fn normalize(raw: &str) -> Result<Vec<Flashcard>, NormalizeError> {
    let text = strip_code_fences(raw.trim());

    let value: Value = serde_json::from_str(text).map_err(|e| NormalizeError::Parse {
        reason: e.to_string(),
        raw: raw.to_string(),
    })?;

    let candidates = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("flashcards") {
            Some(Value::Array(items)) => items,
            Some(_) => {
                return Err(NormalizeError::Structure(
                    "'flashcards' key is not an array".into(),
                ))
            }
            None => {
                return Err(NormalizeError::Structure(
                    "object has no 'flashcards' key".into(),
                ))
            }
        },
        other => {
            return Err(NormalizeError::Structure(format!(
                "expected array or object, got {}",
                json_type_name(&other)
            )))
        }
    };

    let cards: Vec<Flashcard> = candidates.iter().filter_map(card_from_value).collect();

    if cards.is_empty() {
        return Err(NormalizeError::Empty);
    }

    Ok(cards)
}

/// Keep an entry only when both fields are present, string-typed, and
/// non-empty. Everything else is dropped without individual reporting —
/// best-effort tolerance for a language model.
fn card_from_value(value: &Value) -> Option<Flashcard> {
    let question = value.get("question")?.as_str()?;
    let answer = value.get("answer")?.as_str()?;
    if question.is_empty() || answer.is_empty() {
        return None;
    }
    Some(Flashcard::new(question, answer))
}

/// Strip one leading code fence (with an optional language hint) and one
/// trailing fence. Text without a leading fence passes through untouched.
fn strip_code_fences(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop the rest of the fence line (language hint such as "json").
    let rest = match rest.find('\n') {
        Some(i) => &rest[i + 1..],
        None => rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric()),
    };
    let rest = rest.trim();
    match rest.strip_suffix("```") {
        Some(body) => body.trim_end(),
        None => rest,
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WRAPPED: &str =
        r#"{"flashcards":[{"question":"Q1","answer":"A1"},{"question":"Q2","answer":"A2"}]}"#;

    #[test]
    fn parses_object_with_flashcards_key() {
        let cards = normalize(WRAPPED).unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0], Flashcard::new("Q1", "A1"));
        assert_eq!(cards[1], Flashcard::new("Q2", "A2"));
    }

    #[test]
    fn parses_bare_array() {
        let cards = normalize(r#"[{"question":"Q","answer":"A"}]"#).unwrap();
        assert_eq!(cards, vec![Flashcard::new("Q", "A")]);
    }

    #[test]
    fn strips_json_tagged_fences() {
        let fenced = format!("```json\n{WRAPPED}\n```");
        assert_eq!(normalize(&fenced).unwrap(), normalize(WRAPPED).unwrap());
    }

    #[test]
    fn strips_untagged_fences() {
        let fenced = format!("```\n{WRAPPED}\n```");
        assert_eq!(normalize(&fenced).unwrap(), normalize(WRAPPED).unwrap());
    }

    #[test]
    fn strips_fences_with_surrounding_whitespace() {
        let fenced = format!("  \n```json\n{WRAPPED}\n```  \n");
        assert_eq!(normalize(&fenced).unwrap(), normalize(WRAPPED).unwrap());
    }

    #[test]
    fn is_idempotent_on_its_own_output() {
        let cards = normalize(WRAPPED).unwrap();
        let reserialized = serde_json::to_string(&cards).unwrap();
        assert_eq!(normalize(&reserialized).unwrap(), cards);
    }

    #[test]
    fn malformed_json_is_a_parse_error_carrying_the_raw_text() {
        match normalize("not json") {
            Err(NormalizeError::Parse { raw, .. }) => assert_eq!(raw, "not json"),
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn scalar_json_is_a_structure_error() {
        assert!(matches!(
            normalize("42"),
            Err(NormalizeError::Structure(_))
        ));
    }

    #[test]
    fn object_without_flashcards_key_is_a_structure_error() {
        assert!(matches!(
            normalize(r#"{"cards":[]}"#),
            Err(NormalizeError::Structure(_))
        ));
    }

    #[test]
    fn flashcards_key_must_hold_an_array() {
        assert!(matches!(
            normalize(r#"{"flashcards":"lots"}"#),
            Err(NormalizeError::Structure(_))
        ));
    }

    #[test]
    fn entries_missing_answers_yield_empty() {
        let input = r#"[{"question":"Q1"},{"question":"Q2"}]"#;
        assert!(matches!(normalize(input), Err(NormalizeError::Empty)));
    }

    #[test]
    fn empty_array_yields_empty() {
        assert!(matches!(normalize("[]"), Err(NormalizeError::Empty)));
        assert!(matches!(
            normalize(r#"{"flashcards":[]}"#),
            Err(NormalizeError::Empty)
        ));
    }

    #[test]
    fn drops_entries_with_empty_fields_keeping_order() {
        let input = r#"{"flashcards":[{"question":"Q1","answer":"A1"},{"question":"","answer":"A2"}]}"#;
        let cards = normalize(input).unwrap();
        assert_eq!(cards, vec![Flashcard::new("Q1", "A1")]);
    }

    #[test]
    fn drops_entries_with_non_string_fields() {
        let input = r#"[{"question":1,"answer":"A"},{"question":"Q","answer":"A"},{"question":"Q2","answer":null}]"#;
        let cards = normalize(input).unwrap();
        assert_eq!(cards, vec![Flashcard::new("Q", "A")]);
    }

    #[test]
    fn drops_non_object_entries() {
        let input = r#"["just a string",{"question":"Q","answer":"A"}]"#;
        let cards = normalize(input).unwrap();
        assert_eq!(cards, vec![Flashcard::new("Q", "A")]);
    }

    #[test]
    fn single_line_fence_still_parses() {
        let cards = normalize(r#"```json [{"question":"Q","answer":"A"}] ```"#).unwrap();
        assert_eq!(cards, vec![Flashcard::new("Q", "A")]);
    }

    #[test]
    fn unterminated_fence_still_parses() {
        let fenced = format!("```json\n{WRAPPED}");
        assert_eq!(normalize(&fenced).unwrap(), normalize(WRAPPED).unwrap());
    }
}
