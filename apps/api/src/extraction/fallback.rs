//! Fallback Field Extractor — pattern-based recovery of individual fields
//! from malformed model output.
//!
//! This is the load-bearing reliability contract of the whole pipeline: for
//! any input text, `extract_fields` returns a complete record conforming to
//! the declared schema, substituting defaults for anything unmatched. No
//! upstream failure may propagate as an unhandled fault past this point —
//! including a regex that fails to build, which degrades to the default.

use regex::Regex;
use serde_json::Value;

use crate::extraction::schema::{FieldKind, FieldSpec, Record};

/// Recovers a best-effort record from text that failed strict JSON parsing.
///
/// Per field:
/// - scalar-string: first `"<name>": "<value>"` match, contents verbatim
///   (no escape processing).
/// - list-of-string: `"<name>": [` followed by every double-quoted substring
///   up to the closing `]`, or to the end of the text when the bracket was
///   truncated mid-list.
pub fn extract_fields(text: &str, spec: &[FieldSpec]) -> Record {
    let mut record = Record::new();
    for field in spec {
        let value = match field.kind {
            FieldKind::ScalarString { .. } => extract_scalar(text, field.name)
                .map(Value::String)
                .unwrap_or_else(|| field.default_value()),
            FieldKind::StringList { .. } => match extract_list(text, field.name) {
                Some(items) if !items.is_empty() => {
                    Value::Array(items.into_iter().map(Value::String).collect())
                }
                _ => field.default_value(),
            },
        };
        record.insert(field.name.to_string(), value);
    }
    record
}

fn extract_scalar(text: &str, name: &str) -> Option<String> {
    let pattern = format!(r#""{}"\s*:\s*"([^"]*)""#, regex::escape(name));
    let re = Regex::new(&pattern).ok()?;
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

fn extract_list(text: &str, name: &str) -> Option<Vec<String>> {
    let pattern = format!(r#""{}"\s*:\s*\["#, regex::escape(name));
    let re = Regex::new(&pattern).ok()?;
    let opened = re.find(text)?;

    let rest = &text[opened.end()..];
    // Truncated output may never close the bracket; scan to end in that case.
    let body = match rest.find(']') {
        Some(close) => &rest[..close],
        None => rest,
    };

    // Splitting on '"' leaves quoted contents at the odd indices, in order.
    Some(
        body.split('"')
            .skip(1)
            .step_by(2)
            .map(str::to_string)
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const JD_SPEC: &[FieldSpec] = &[
        FieldSpec::scalar("JobTitle", "Not specified"),
        FieldSpec::scalar("Location", "Not specified"),
        FieldSpec::list("RequiredSkills", &[]),
        FieldSpec::list("Responsibilities", &["To be discussed"]),
    ];

    #[test]
    fn test_recovers_fields_from_truncated_output() {
        // Unbalanced braces, prose preamble — strict parsing is hopeless here.
        let text = r#"Here is the result: {"JobTitle": "Engineer", "RequiredSkills": ["Python", "SQL"]"#;
        let record = extract_fields(text, JD_SPEC);

        assert_eq!(record["JobTitle"], json!("Engineer"));
        assert_eq!(record["RequiredSkills"], json!(["Python", "SQL"]));
    }

    #[test]
    fn test_totality_record_fields_are_exactly_the_schema() {
        for text in ["", "complete garbage }{][", "{\"JobTitle\": 12", "\u{0}\u{7f}"] {
            let record = extract_fields(text, JD_SPEC);
            assert_eq!(record.len(), JD_SPEC.len(), "input: {text:?}");
            for field in JD_SPEC {
                assert!(record.contains_key(field.name), "input: {text:?}");
            }
        }
    }

    #[test]
    fn test_unmatched_fields_get_defaults() {
        let record = extract_fields("nothing useful here", JD_SPEC);

        assert_eq!(record["JobTitle"], json!("Not specified"));
        assert_eq!(record["RequiredSkills"], json!([]));
        assert_eq!(record["Responsibilities"], json!(["To be discussed"]));
    }

    #[test]
    fn test_scalar_takes_first_match_verbatim() {
        let text = r#""JobTitle": "First \ u0045", "JobTitle": "Second""#;
        let record = extract_fields(text, JD_SPEC);

        // First match wins; backslash content is kept as-is, no escape processing.
        assert_eq!(record["JobTitle"], json!(r"First \ u0045"));
    }

    #[test]
    fn test_list_preserves_element_order() {
        let text = r#""RequiredSkills": [ "Zig" , "Ada", "C" ]"#;
        let record = extract_fields(text, JD_SPEC);

        assert_eq!(record["RequiredSkills"], json!(["Zig", "Ada", "C"]));
    }

    #[test]
    fn test_empty_bracket_uses_default() {
        let text = r#""Responsibilities": [], "JobTitle": "Engineer""#;
        let record = extract_fields(text, JD_SPEC);

        assert_eq!(record["Responsibilities"], json!(["To be discussed"]));
    }

    #[test]
    fn test_whitespace_between_name_colon_and_value() {
        let text = "\"Location\"  :   \"Remote\"";
        let record = extract_fields(text, JD_SPEC);

        assert_eq!(record["Location"], json!("Remote"));
    }

    #[test]
    fn test_list_closing_bracket_bounds_the_scan() {
        // The scan must stop at `]` and not swallow the next field's strings.
        let text = r#""RequiredSkills": ["Rust"], "Responsibilities": ["Ship it"]"#;
        let record = extract_fields(text, JD_SPEC);

        assert_eq!(record["RequiredSkills"], json!(["Rust"]));
        assert_eq!(record["Responsibilities"], json!(["Ship it"]));
    }
}
