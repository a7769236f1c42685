//! Field-level shape checking for parsed configuration values.
//!
//! Validation is all-or-nothing for a whole file: checkers walk the parsed
//! document, collect every mismatch, and either return the typed records or
//! the full issue list. Flattening the issues into a display string is a
//! pure formatting step.

use serde_json::Value;
use std::fmt;

/// One field-level mismatch, addressed by a dotted/indexed path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeIssue {
    pub path: String,
    pub message: String,
}

impl ShapeIssue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ShapeIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Flatten issues into the human-readable summary shown in a toast.
pub fn flatten_issues(issues: &[ShapeIssue]) -> String {
    issues
        .iter()
        .map(ShapeIssue::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Short description of a JSON value's type, for mismatch messages.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
