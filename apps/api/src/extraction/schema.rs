//! Field schemas — the construction-with-defaults pattern shared by the
//! strict and fallback parse paths.
//!
//! A schema is a fixed slice of (name, kind, default) triples processed
//! uniformly, instead of ad hoc per-field conditionals. Both paths produce a
//! record whose keys are exactly the declared schema.

use serde_json::{Map, Value};

/// A record conforming to a `FieldSpec` schema.
pub type Record = Map<String, Value>;

/// The kind of a declared field. The kind carries the caller-supplied
/// default substituted when the field cannot be recovered.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    ScalarString { default: &'static str },
    StringList { default: &'static [&'static str] },
}

/// One field of an extraction schema.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn scalar(name: &'static str, default: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::ScalarString { default },
        }
    }

    pub const fn list(name: &'static str, default: &'static [&'static str]) -> Self {
        Self {
            name,
            kind: FieldKind::StringList { default },
        }
    }

    /// The default value for this field as a JSON value.
    pub fn default_value(&self) -> Value {
        match self.kind {
            FieldKind::ScalarString { default } => Value::String(default.to_string()),
            FieldKind::StringList { default } => Value::Array(
                default
                    .iter()
                    .map(|s| Value::String(s.to_string()))
                    .collect(),
            ),
        }
    }
}

/// Builds a record conforming to `spec` from a successfully parsed JSON
/// object. Values of the wrong shape are replaced by the field default;
/// extra keys in the parsed object are dropped.
///
/// Scalars tolerate the model answering with a bare number or bool where a
/// string was requested. Lists keep string elements (stringifying numeric
/// ones) in their original order; a present-but-empty array is kept as-is —
/// the model affirmatively said "none".
pub fn conform(parsed: &Map<String, Value>, spec: &[FieldSpec]) -> Record {
    let mut record = Record::new();
    for field in spec {
        let value = match (&field.kind, parsed.get(field.name)) {
            (FieldKind::ScalarString { .. }, Some(Value::String(s))) => {
                Value::String(s.clone())
            }
            (FieldKind::ScalarString { .. }, Some(Value::Number(n))) => {
                Value::String(n.to_string())
            }
            (FieldKind::ScalarString { .. }, Some(Value::Bool(b))) => {
                Value::String(b.to_string())
            }
            (FieldKind::StringList { .. }, Some(Value::Array(items))) => Value::Array(
                items
                    .iter()
                    .filter_map(|item| match item {
                        Value::String(s) => Some(Value::String(s.clone())),
                        Value::Number(n) => Some(Value::String(n.to_string())),
                        _ => None,
                    })
                    .collect(),
            ),
            _ => field.default_value(),
        };
        record.insert(field.name.to_string(), value);
    }
    record
}
