use std::fmt;

use serde_json::{Number, Value};

use crate::form::slot::Label;

/// A raw response that does not match the shape of the form it answers.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// SimpleForm response was neither null nor an integer
    ExpectedInteger { got: &'static str },

    /// SimpleForm response pointed past the button list
    ButtonNotFound(Number),

    /// ModalForm response was not a boolean
    ExpectedBoolean { got: &'static str },

    /// CustomForm response was neither null nor an array
    ExpectedArray { got: &'static str },

    /// CustomForm response array has the wrong number of slots
    SizeMismatch { expected: usize, got: usize },

    /// No predicate registered for this slot position
    InvalidElement(usize),

    /// Slot value rejected by its predicate
    InvalidType(Label),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::ExpectedInteger { got } => {
                write!(f, "expected integer, got {}", got)
            }
            ValidationError::ButtonNotFound(n) => {
                write!(f, "button {} does not exist", n)
            }
            ValidationError::ExpectedBoolean { got } => {
                write!(f, "expected boolean, got {}", got)
            }
            ValidationError::ExpectedArray { got } => {
                write!(f, "expected array, got {}", got)
            }
            ValidationError::SizeMismatch { expected, got } => {
                write!(f, "expected array of size {}, got {}", expected, got)
            }
            ValidationError::InvalidElement(i) => {
                write!(f, "invalid element {}", i)
            }
            ValidationError::InvalidType(label) => {
                write!(f, "invalid type for element {}", label)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// JSON type name used in validation messages.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Errors surfaced by the command-line front end.
#[derive(Debug)]
pub enum FormError {
    /// Reading a form or config file failed
    Io { path: String, source: std::io::Error },

    /// JSON parsing failed (form file or response payload)
    JsonParse { context: String, source: serde_json::Error },

    /// YAML parsing failed (form file)
    YamlParse { context: String, source: serde_yaml::Error },

    /// Response did not validate against the form
    Validation(ValidationError),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::Io { path, source } => {
                write!(f, "Failed to read {}: {}", path, source)
            }
            FormError::JsonParse { context, source } => {
                write!(f, "JSON parse error ({}): {}", context, source)
            }
            FormError::YamlParse { context, source } => {
                write!(f, "YAML parse error ({}): {}", context, source)
            }
            FormError::Validation(e) => {
                write!(f, "Validation failed: {}", e)
            }
        }
    }
}

impl std::error::Error for FormError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormError::Io { source, .. } => Some(source),
            FormError::JsonParse { source, .. } => Some(source),
            FormError::YamlParse { source, .. } => Some(source),
            FormError::Validation(e) => Some(e),
        }
    }
}

impl From<ValidationError> for FormError {
    fn from(e: ValidationError) -> Self {
        FormError::Validation(e)
    }
}
