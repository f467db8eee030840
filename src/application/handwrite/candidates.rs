//! Candidate mining over recognizer responses.
//!
//! The recognizer's response shape is undocumented and changes without
//! notice, so instead of a fixed schema the whole JSON tree is walked and
//! every array made only of strings is treated as a candidate list.

use serde_json::Value;

use crate::domain::is_cjk_string;

/// Extract recognition candidates from an arbitrary JSON response.
///
/// Depth-first, document order. Arrays whose every element is a string
/// contribute their kana/kanji members; any other array or object is
/// descended into. Duplicates are removed keeping the first occurrence. If
/// any single-character candidate exists, only single characters are
/// returned.
#[must_use]
pub fn extract_candidates(response: &Value) -> Vec<String> {
    let mut found = Vec::new();
    walk(response, &mut found);

    let mut unique: Vec<String> = Vec::with_capacity(found.len());
    for candidate in found {
        if !unique.contains(&candidate) {
            unique.push(candidate);
        }
    }

    if unique.iter().any(|c| is_single_char(c)) {
        unique.retain(|c| is_single_char(c));
    }
    unique
}

fn walk(node: &Value, out: &mut Vec<String>) {
    match node {
        Value::Array(items) if is_string_list(items) => out.extend(
            items
                .iter()
                .filter_map(Value::as_str)
                .filter(|s| is_cjk_string(s))
                .map(str::to_string),
        ),
        Value::Array(items) => items.iter().for_each(|item| walk(item, out)),
        Value::Object(map) => map.values().for_each(|value| walk(value, out)),
        _ => {}
    }
}

fn is_string_list(items: &[Value]) -> bool {
    !items.is_empty() && items.iter().all(Value::is_string)
}

fn is_single_char(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next().is_some() && chars.next().is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn google_style_response_prefers_single_characters() {
        let response = json!([
            "SUCCESS",
            [["6f2c6a40", ["猫", "描", "苗", "猫舌"], [], {"is_html_escaped": false}]]
        ]);
        assert_eq!(extract_candidates(&response), vec!["猫", "描", "苗"]);
    }

    #[test]
    fn object_members_are_walked_as_received() {
        let response: Value = serde_json::from_str(r#"{"zeta":["猫"],"alpha":["犬"]}"#).unwrap();
        assert_eq!(extract_candidates(&response), vec!["猫", "犬"]);
    }

    #[test]
    fn multi_character_candidates_kept_when_no_singles() {
        let response = json!({"result": [["日本", "日本語"], ["日本"]]});
        assert_eq!(extract_candidates(&response), vec!["日本", "日本語"]);
    }

    #[test]
    fn mixed_arrays_are_descended_not_collected() {
        // The outer list mixes a string with a nested array, so its own
        // string members are ignored.
        let response = json!(["猫", ["犬"]]);
        assert_eq!(extract_candidates(&response), vec!["犬"]);
    }

    #[test]
    fn latin_only_lists_yield_nothing() {
        let response = json!([["SUCCESS", "abc"], {"status": ["ok"]}]);
        assert!(extract_candidates(&response).is_empty());
    }

    #[test]
    fn scalars_and_empty_values() {
        assert!(extract_candidates(&json!(null)).is_empty());
        assert!(extract_candidates(&json!("猫")).is_empty());
        assert!(extract_candidates(&json!([[]])).is_empty());
    }
}
