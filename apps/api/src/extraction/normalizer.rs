//! Response Normalizer — turns raw model text into a schema-conforming
//! record.
//!
//! Flow: trim → fence strip → brace slice → strict parse → fallback
//! extraction. Every call returns a `ParseOutcome`; the only way to get
//! `Error` is an upstream model failure where no text exists at all.

use serde_json::Value;
use tracing::debug;

use crate::extraction::fallback::extract_fields;
use crate::extraction::schema::{conform, FieldSpec, Record};
use crate::llm_client::LlmClient;

/// Note attached to every fallback-recovered record.
pub const BEST_EFFORT_NOTE: &str = "best-effort extraction";

/// The contract every normalizer call returns.
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    /// Strict parse succeeded; the record conforms to the requested schema.
    Structured(Record),
    /// Strict parse failed; the record was recovered field-by-field.
    Fallback { record: Record, note: &'static str },
    /// The upstream model call itself failed — no text was available.
    Error { message: String, raw_text: String },
}

impl ParseOutcome {
    /// The recovered record, if any.
    pub fn record(&self) -> Option<&Record> {
        match self {
            ParseOutcome::Structured(record) => Some(record),
            ParseOutcome::Fallback { record, .. } => Some(record),
            ParseOutcome::Error { .. } => None,
        }
    }

    /// True when the record came from fallback recovery rather than a
    /// strict parse.
    pub fn is_degraded(&self) -> bool {
        matches!(self, ParseOutcome::Fallback { .. })
    }
}

/// Normalizes raw model output against an expected schema.
///
/// An empty or whitespace-only input is an immediate parse failure — never
/// an empty-but-valid structured record — so it takes the fallback path and
/// comes back as all defaults.
pub fn normalize(raw_text: &str, spec: &[FieldSpec]) -> ParseOutcome {
    let trimmed = raw_text.trim();
    if trimmed.is_empty() {
        return fallback_outcome("", spec);
    }

    let unfenced = strip_fences(trimmed);

    // Isolate the JSON object substring when the model added prose around it.
    let candidate = if unfenced.starts_with('{') {
        Some(unfenced)
    } else {
        match (unfenced.find('{'), unfenced.rfind('}')) {
            (Some(open), Some(close)) if open < close => Some(&unfenced[open..=close]),
            _ => None,
        }
    };

    let Some(json_text) = candidate else {
        // No object delimiters at all — recover what we can from the text.
        return fallback_outcome(unfenced, spec);
    };

    match serde_json::from_str::<Value>(json_text) {
        Ok(Value::Object(map)) => ParseOutcome::Structured(conform(&map, spec)),
        Ok(other) => {
            debug!("Strict parse yielded non-object JSON ({other}), using fallback");
            fallback_outcome(json_text, spec)
        }
        Err(e) => {
            debug!("Strict parse failed ({e}), using fallback extraction");
            fallback_outcome(json_text, spec)
        }
    }
}

/// Runs one full extraction step: prompt → model → normalize.
///
/// A model-invocation failure maps to `ParseOutcome::Error` with an empty
/// `raw_text`, without attempting extraction.
pub async fn extract_structured(
    llm: &LlmClient,
    prompt: &str,
    system: &str,
    spec: &[FieldSpec],
) -> ParseOutcome {
    match llm.call_text(prompt, system).await {
        Ok(text) => normalize(&text, spec),
        Err(e) => ParseOutcome::Error {
            message: e.to_string(),
            raw_text: String::new(),
        },
    }
}

fn fallback_outcome(text: &str, spec: &[FieldSpec]) -> ParseOutcome {
    ParseOutcome::Fallback {
        record: extract_fields(text, spec),
        note: BEST_EFFORT_NOTE,
    }
}

/// Strips a fenced block marker — a run of three or more backticks or
/// tildes, optionally followed by a language tag — when it appears at both
/// the start and the end of the text. Anything else is returned unchanged;
/// a half-fenced response is left for the brace-slice step to rescue.
fn strip_fences(text: &str) -> &str {
    let delim = match text.chars().next() {
        Some(c @ ('`' | '~')) => c,
        _ => return text,
    };

    let open_len = text.chars().take_while(|&c| c == delim).count();
    let close_len = text.chars().rev().take_while(|&c| c == delim).count();
    if open_len < 3 || close_len < 3 || open_len + close_len >= text.len() {
        return text;
    }

    let mut inner = &text[open_len..text.len() - close_len];

    // Optional language tag directly after the opening fence ("json", "JSON5"…).
    let tag_len = inner
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .count();
    if tag_len > 0 {
        let after_tag = &inner[tag_len..];
        if after_tag.starts_with([' ', '\t', '\r', '\n']) {
            inner = after_tag;
        }
    }

    inner.trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SPEC: &[FieldSpec] = &[
        FieldSpec::scalar("JobTitle", "Not specified"),
        FieldSpec::scalar("Department", "Not specified"),
        FieldSpec::list("RequiredSkills", &[]),
    ];

    #[test]
    fn test_plain_json_parses_structured() {
        let outcome = normalize(r#"{"JobTitle": "Engineer"}"#, SPEC);

        let ParseOutcome::Structured(record) = outcome else {
            panic!("expected Structured");
        };
        assert_eq!(record["JobTitle"], json!("Engineer"));
        // Other fields defaulted by the schema.
        assert_eq!(record["Department"], json!("Not specified"));
        assert_eq!(record["RequiredSkills"], json!([]));
    }

    #[test]
    fn test_fenced_json_with_language_tag() {
        let outcome = normalize("```json\n{\"JobTitle\": \"Engineer\"}\n```", SPEC);

        let ParseOutcome::Structured(record) = outcome else {
            panic!("expected Structured");
        };
        assert_eq!(record["JobTitle"], json!("Engineer"));
    }

    #[test]
    fn test_fence_stripping_is_a_noop_on_semantics() {
        let bare = r#"{"JobTitle": "Engineer", "RequiredSkills": ["Rust"]}"#;
        let fenced = format!("```json\n{bare}\n```");
        let tilde_fenced = format!("~~~~\n{bare}\n~~~~");

        let expected = normalize(bare, SPEC);
        for wrapped in [fenced, tilde_fenced] {
            match (&expected, normalize(&wrapped, SPEC)) {
                (ParseOutcome::Structured(a), ParseOutcome::Structured(b)) => {
                    assert_eq!(*a, b)
                }
                _ => panic!("both should be Structured"),
            }
        }
    }

    #[test]
    fn test_prose_around_object_is_sliced_away() {
        let text = r#"Sure! Here is the summary you asked for:
            {"JobTitle": "Engineer", "RequiredSkills": ["Rust", "SQL"]}
            Let me know if you need anything else."#;
        let outcome = normalize(text, SPEC);

        let ParseOutcome::Structured(record) = outcome else {
            panic!("expected Structured");
        };
        assert_eq!(record["RequiredSkills"], json!(["Rust", "SQL"]));
    }

    #[test]
    fn test_truncated_object_recovers_via_fallback() {
        let text = r#"Here is the result: {"JobTitle": "Engineer", "RequiredSkills": ["Python", "SQL"]"#;
        let outcome = normalize(text, SPEC);

        assert!(outcome.is_degraded());
        let record = outcome.record().unwrap();
        assert_eq!(record["JobTitle"], json!("Engineer"));
        assert_eq!(record["RequiredSkills"], json!(["Python", "SQL"]));
    }

    #[test]
    fn test_empty_input_is_a_parse_failure_not_an_empty_record() {
        for text in ["", "   ", "\n\t\n"] {
            let outcome = normalize(text, SPEC);
            assert!(outcome.is_degraded(), "input: {text:?}");
            // Defaults throughout — a complete record, never a partial one.
            let record = outcome.record().unwrap();
            assert_eq!(record["JobTitle"], json!("Not specified"));
        }
    }

    #[test]
    fn test_non_object_json_falls_back() {
        let outcome = normalize(r#"["JobTitle", "Engineer"]"#, SPEC);
        assert!(outcome.is_degraded());
    }

    #[test]
    fn test_fallback_note_is_attached() {
        let outcome = normalize("not json at all", SPEC);
        let ParseOutcome::Fallback { note, .. } = outcome else {
            panic!("expected Fallback");
        };
        assert_eq!(note, BEST_EFFORT_NOTE);
    }

    #[test]
    fn test_strip_fences_requires_both_ends() {
        // Half-fenced: the opening marker is there but no closing one.
        assert_eq!(
            strip_fences("```json\n{\"a\": 1}"),
            "```json\n{\"a\": 1}"
        );
        // The brace slice still rescues the object.
        let outcome = normalize("```json\n{\"JobTitle\": \"Engineer\"}", SPEC);
        let ParseOutcome::Structured(record) = outcome else {
            panic!("expected Structured");
        };
        assert_eq!(record["JobTitle"], json!("Engineer"));
    }

    #[test]
    fn test_strip_fences_short_runs_untouched() {
        assert_eq!(strip_fences("``x``"), "``x``");
        assert_eq!(strip_fences("~~x~~"), "~~x~~");
    }

    #[test]
    fn test_strip_fences_longer_runs() {
        assert_eq!(strip_fences("`````\n{\"a\": 1}\n`````"), "{\"a\": 1}");
    }

    #[test]
    fn test_all_delimiters_no_content() {
        // Degenerate fence with nothing inside must not panic or slice badly.
        let outcome = normalize("``````", SPEC);
        assert!(outcome.is_degraded());
    }
}
