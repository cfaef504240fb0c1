use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Caller-facing key for a response slot.
///
/// Slots added without an explicit label fall back to their zero-based
/// position, so every slot has a deterministic key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Index(usize),
    Named(String),
}

impl Label {
    pub fn resolve(label: Option<String>, position: usize) -> Self {
        match label {
            Some(name) => Label::Named(name),
            None => Label::Index(position),
        }
    }

    /// Key used when the label becomes a JSON object key.
    pub fn as_key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Index(i) => write!(f, "{}", i),
            Label::Named(name) => f.write_str(name),
        }
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Label::Named(s.to_string())
    }
}

impl From<String> for Label {
    fn from(s: String) -> Self {
        Label::Named(s)
    }
}

impl From<usize> for Label {
    fn from(i: usize) -> Self {
        Label::Index(i)
    }
}

/// Predicate applied to one slot of a custom form response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum SlotRule {
    /// Header and divider slots: the client always sends null
    Null,

    /// Toggle: a boolean
    Bool,

    /// Slider: any number within `[min, max]`
    Number { min: i64, max: i64 },

    /// Step slider and dropdown: an integer index into `len` choices
    Index { len: usize },

    /// Text input: a string
    Text,
}

impl SlotRule {
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            SlotRule::Null => value.is_null(),
            SlotRule::Bool => value.is_boolean(),
            SlotRule::Number { min, max } => match as_integer(value) {
                Some(i) => i >= i128::from(*min) && i <= i128::from(*max),
                None => match value.as_f64() {
                    Some(v) => v >= *min as f64 && v <= *max as f64,
                    None => false,
                },
            },
            SlotRule::Index { len } => match as_integer(value) {
                Some(i) => usize::try_from(i).is_ok_and(|i| i < *len),
                None => false,
            },
            SlotRule::Text => value.is_string(),
        }
    }
}

/// Integer view of a JSON value. Floats never count, even `1.0`.
pub fn as_integer(value: &Value) -> Option<i128> {
    match value {
        Value::Number(n) if n.is_i64() => n.as_i64().map(i128::from),
        Value::Number(n) if n.is_u64() => n.as_u64().map(i128::from),
        _ => None,
    }
}

/// One response slot: its label-map entry and its predicate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slot {
    pub label: Label,
    #[serde(flatten)]
    pub rule: SlotRule,
}

impl Slot {
    pub fn new(label: Label, rule: SlotRule) -> Self {
        Self { label, rule }
    }
}
