//! Structural validation of loosely-typed template JSON
//!
//! Checks field presence and types only; values are not range checked.
//! Validation stops at the first failure.

use crate::schema::{Align, Origin};
use serde_json::{Map, Value};
use std::fmt;

/// What was wrong with a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    Missing,
    WrongType { expected: &'static str },
    Unsupported { value: String },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Missing => write!(f, "is missing"),
            Violation::WrongType { expected } => write!(f, "must be {expected}"),
            Violation::Unsupported { value } => write!(f, "has unsupported value '{value}'"),
        }
    }
}

/// A template that does not match the expected shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaError {
    /// Offending field name
    pub field: String,
    /// 0-based box index, when the failure is inside a box
    pub box_index: Option<usize>,
    pub violation: Violation,
}

impl SchemaError {
    fn new(field: &str, violation: Violation) -> Self {
        Self {
            field: field.to_string(),
            box_index: None,
            violation,
        }
    }

    fn in_box(mut self, index: usize) -> Self {
        self.box_index = Some(index);
        self
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.violation)?;
        if let Some(index) = self.box_index {
            write!(f, " on box number {index}")?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaError {}

const PAIR: &str = "a pair of numbers";

/// Validate a template value: the top-level shape, then each box in order
pub fn validate_template(template: &Value) -> Result<(), SchemaError> {
    let root = template
        .as_object()
        .ok_or_else(|| SchemaError::new("template", Violation::WrongType { expected: "an object" }))?;

    require(root, "font", Value::is_string, "a string")?;
    require(root, "size", is_pair, PAIR)?;
    require(root, "boxes", Value::is_array, "an array")?;
    if let Some(origin) = root.get("origin") {
        check_name(origin, "origin", &Origin::NAMES)?;
    }

    if let Some(boxes) = root.get("boxes").and_then(Value::as_array) {
        for (index, label_box) in boxes.iter().enumerate() {
            validate_box(label_box).map_err(|e| e.in_box(index))?;
        }
    }

    Ok(())
}

/// Validate a single box value
pub fn validate_box(label_box: &Value) -> Result<(), SchemaError> {
    let fields = label_box
        .as_object()
        .ok_or_else(|| SchemaError::new("box", Violation::WrongType { expected: "an object" }))?;

    require(fields, "position", is_pair, PAIR)?;
    require(fields, "size", is_pair, PAIR)?;
    require(fields, "align", Value::is_string, "a string")?;
    require(fields, "font_size", is_integer, "an integer")?;

    if let Some(align) = fields.get("align") {
        check_name(align, "align", &Align::NAMES)?;
    }

    Ok(())
}

fn require(
    fields: &Map<String, Value>,
    field: &str,
    check: fn(&Value) -> bool,
    expected: &'static str,
) -> Result<(), SchemaError> {
    match fields.get(field) {
        None => Err(SchemaError::new(field, Violation::Missing)),
        Some(value) if !check(value) => {
            Err(SchemaError::new(field, Violation::WrongType { expected }))
        }
        Some(_) => Ok(()),
    }
}

fn check_name(value: &Value, field: &str, allowed: &[&str]) -> Result<(), SchemaError> {
    let name = value
        .as_str()
        .ok_or_else(|| SchemaError::new(field, Violation::WrongType { expected: "a string" }))?;
    if allowed.iter().any(|allowed| *allowed == name) {
        Ok(())
    } else {
        Err(SchemaError::new(
            field,
            Violation::Unsupported {
                value: name.to_string(),
            },
        ))
    }
}

fn is_pair(value: &Value) -> bool {
    matches!(value.as_array(), Some(items) if items.len() == 2 && items.iter().all(Value::is_number))
}

fn is_integer(value: &Value) -> bool {
    value.is_i64() || value.is_u64()
}
