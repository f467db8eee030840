//! Parts-of-speech flattening.

use serde_json::Value;

/// Flatten a source-specific parts-of-speech value to string tags.
///
/// Accepts a bare string (`"Noun"`), a single-key mapping whose key is the
/// tag (`{"Noun": "Normal"}`), or arbitrarily nested lists of either.
/// Empty strings, empty mappings, `null` and booleans are dropped and
/// duplicates are removed keeping the first occurrence.
#[must_use]
pub fn flatten_parts_of_speech(value: &Value) -> Vec<String> {
    let mut tags = Vec::new();
    collect(value, &mut tags);
    tags
}

fn collect(value: &Value, tags: &mut Vec<String>) {
    match value {
        Value::String(s) => push_unique(tags, s),
        Value::Object(map) => {
            if let Some(key) = map.keys().next() {
                push_unique(tags, key);
            }
        }
        Value::Array(items) => items.iter().for_each(|item| collect(item, tags)),
        Value::Number(n) => push_unique(tags, &n.to_string()),
        Value::Null | Value::Bool(_) => {}
    }
}

fn push_unique(tags: &mut Vec<String>, tag: &str) {
    if !tag.is_empty() && !tags.iter().any(|t| t == tag) {
        tags.push(tag.to_string());
    }
}
