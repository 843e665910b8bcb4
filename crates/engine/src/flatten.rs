use serde_json::Value;

use crate::error::EquivError;
use crate::model::Grouping;

/// Collapse a nested JSON object into a grouping keyed by lowercase field
/// name, accumulating the lowercase canonical form of every leaf value
/// observed under that name at any depth.
///
/// Object values recurse (the parent key contributes no leaf of its own);
/// every other value is a leaf. Arrays are opaque leaves: the whole array
/// serializes as one scalar, elements get no treatment of their own.
pub fn flatten(document: &Value) -> Result<Grouping, EquivError> {
    let map = document.as_object().ok_or(EquivError::NotAnObject {
        found: json_type_name(document),
    })?;

    let mut grouping = Grouping::new();
    collect(map, &mut grouping);
    Ok(grouping)
}

fn collect(map: &serde_json::Map<String, Value>, grouping: &mut Grouping) {
    for (key, value) in map {
        match value {
            Value::Object(inner) => collect(inner, grouping),
            leaf => {
                grouping
                    .entry(key.to_lowercase())
                    .or_default()
                    .insert(canonical(leaf));
            }
        }
    }
}

/// Canonical lowercase string form of a leaf value.
///
/// Null maps to the literal `null`, so `{"x": null}` and `{"x": "null"}`
/// flatten identically.
pub fn canonical(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.to_lowercase(),
        other => other.to_string().to_lowercase(),
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

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
