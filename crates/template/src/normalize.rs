//! Key normalization for loosely-typed template input
//!
//! Templates written by hand (or exported from other tools) may carry keys
//! such as `":font"` or `" boxes "`. Normalization rewrites every mapping key
//! to its canonical form before validation.

use serde_json::{Map, Value};

/// Canonical form of a key: trimmed, leading `:` markers removed, trimmed again
pub fn canonical_key(key: &str) -> &str {
    key.trim().trim_start_matches(':').trim()
}

/// Recursively rewrite every mapping key to its canonical form
///
/// Sequences are normalized element-wise and scalars are returned unchanged.
/// If two keys of one mapping collide, the later one wins.
pub fn normalize_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut normalized = Map::with_capacity(map.len());
            for (key, value) in map {
                normalized.insert(canonical_key(&key).to_string(), normalize_keys(value));
            }
            Value::Object(normalized)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_keys).collect()),
        scalar => scalar,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_canonical_key() {
        assert_eq!(canonical_key("font"), "font");
        assert_eq!(canonical_key(":font"), "font");
        assert_eq!(canonical_key(" font "), "font");
        assert_eq!(canonical_key(" : font"), "font");
        assert_eq!(canonical_key("::font"), "font");
        assert_eq!(canonical_key(""), "");
    }

    #[test]
    fn test_normalize_nested() {
        let input = json!({
            ":font": "Helvetica",
            " size ": [288, 144],
            ":boxes": [
                { ":position": [0, 0], ":size": [10, 10], "align": "left", ":font_size": 8 }
            ]
        });
        let expected = json!({
            "font": "Helvetica",
            "size": [288, 144],
            "boxes": [
                { "position": [0, 0], "size": [10, 10], "align": "left", "font_size": 8 }
            ]
        });
        assert_eq!(normalize_keys(input), expected);
    }

    #[test]
    fn test_values_are_untouched() {
        let input = json!({ "text": " :keep me " });
        assert_eq!(normalize_keys(input.clone()), input);
        assert_eq!(normalize_keys(json!(":scalar")), json!(":scalar"));
    }

    #[test]
    fn test_idempotent() {
        let input = json!({ " :a": { ":b": [{ " c": 1 }] }, "d": null });
        let once = normalize_keys(input);
        let twice = normalize_keys(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_collision_keeps_one_key() {
        let input = json!({ ":font": "Courier", "font": "Helvetica" });
        let normalized = normalize_keys(input);
        let map = normalized.as_object().unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map["font"], json!("Helvetica"));
    }
}
