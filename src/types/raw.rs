// src/types/raw.rs
//! Tolerant access to loosely shaped résumé records.
//!
//! Records arrive from the editor as arbitrary JSON. Nothing here fails:
//! a field that is missing, null or of the wrong type simply reads as absent.

use serde_json::{Map, Value};

/// A résumé record exactly as the caller supplied it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawResumeRecord(Value);

impl RawResumeRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Top-level field, `None` when the record is not an object or the field is null.
    pub fn field(&self, key: &str) -> Option<&Value> {
        field(&self.0, key)
    }

    /// First field among `keys` that holds an array.
    pub fn list(&self, keys: &[&str]) -> Option<&Vec<Value>> {
        keys.iter()
            .find_map(|key| self.field(key).and_then(Value::as_array))
    }

    pub fn object(&self, key: &str) -> Option<&Map<String, Value>> {
        self.field(key).and_then(Value::as_object)
    }
}

impl From<Value> for RawResumeRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Non-null field of an object value.
pub fn field<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.as_object()?.get(key).filter(|v| !v.is_null())
}

/// Scalar rendered as text: strings as-is, numbers stringified, anything else absent.
pub fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

pub fn text_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).and_then(text)
}

/// First of `keys` that reads as text.
pub fn text_field_any(map: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| text_field(map, key))
}

/// True when the text has something other than whitespace.
pub fn is_populated(value: Option<&str>) -> bool {
    value.is_some_and(|s| !s.trim().is_empty())
}
