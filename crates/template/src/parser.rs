//! Template and data JSON parsing

use crate::normalize::normalize_keys;
use crate::validate::validate_template;
use crate::{Result, Template, TemplateError};
use serde_json::Value;

/// Parse a template from a JSON string
///
/// Keys are normalized and the template is validated before it is
/// deserialized, so shape errors are reported with their box index.
pub fn parse_template(json: &str) -> Result<Template> {
    let value: Value =
        serde_json::from_str(json).map_err(|e| TemplateError::ParseError(e.to_string()))?;
    Template::from_value(value)
}

impl Template {
    /// Build a template from a loosely-typed JSON value
    pub fn from_value(value: Value) -> Result<Self> {
        let value = normalize_keys(value);
        validate_template(&value)?;
        Ok(serde_json::from_value(value)?)
    }

    /// Parse a template from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        parse_template(json)
    }
}

/// Parse the data list: a JSON array with one entry per box
///
/// Non-string scalars are converted to their text form.
pub fn parse_data(json: &str) -> Result<Vec<String>> {
    let value: Value =
        serde_json::from_str(json).map_err(|e| TemplateError::ParseError(e.to_string()))?;
    match value {
        Value::Array(items) => Ok(items.iter().map(value_to_string).collect()),
        other => Err(TemplateError::ParseError(format!(
            "Data must be a JSON array, got {other}"
        ))),
    }
}

/// Convert a JSON value to string for rendering
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Align, Origin};
    use crate::validate::Violation;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_value_to_string() {
        assert_eq!(value_to_string(&json!("hello")), "hello");
        assert_eq!(value_to_string(&json!(42)), "42");
        assert_eq!(value_to_string(&json!(true)), "true");
        assert_eq!(value_to_string(&json!(null)), "");
    }

    #[test]
    fn test_parse_template() {
        let json = r#"{
            "font": "Helvetica",
            "size": [288, 144],
            "boxes": [
                { "position": [0, 0], "size": [100, 50], "align": "left", "font_size": 10 }
            ]
        }"#;

        let template = parse_template(json).unwrap();
        assert_eq!(template.font, "Helvetica");
        assert_eq!(template.size.width, 288.0);
        assert_eq!(template.boxes.len(), 1);
        assert_eq!(template.boxes[0].align, Align::Left);
        assert_eq!(template.origin, Origin::TopLeft);
    }

    #[test]
    fn test_parse_template_with_symbol_keys() {
        let json = r#"{
            ":font": "Courier",
            ":size": [100, 50],
            ":boxes": [
                { ":position": [1, 2], ":size": [3, 4], ":align": "right", ":font_size": 7 }
            ]
        }"#;

        let template = parse_template(json).unwrap();
        assert_eq!(template.font, "Courier");
        assert_eq!(template.boxes[0].font_size, 7);
    }

    #[test]
    fn test_parse_template_reports_schema_error() {
        let json = r#"{ "font": "Helvetica", "size": [288, 144], "boxes": [ { "position": [0, 0] } ] }"#;

        match parse_template(json) {
            Err(TemplateError::Schema(err)) => {
                assert_eq!(err.box_index, Some(0));
                assert_eq!(err.field, "size");
                assert_eq!(err.violation, Violation::Missing);
            }
            other => panic!("Expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_template_invalid_json() {
        assert!(matches!(parse_template("{"), Err(TemplateError::ParseError(_))));
    }

    #[test]
    fn test_parse_data() {
        let data = parse_data(r#"["text:Hello", "qr:abc", 42]"#).unwrap();
        assert_eq!(data, vec!["text:Hello", "qr:abc", "42"]);
    }

    #[test]
    fn test_parse_data_requires_array() {
        assert!(matches!(
            parse_data(r#"{"a": 1}"#),
            Err(TemplateError::ParseError(_))
        ));
    }
}
