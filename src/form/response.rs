use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use crate::form::slot::Label;

/// Validated response handed to the form callback.
#[derive(Debug, Clone, PartialEq)]
pub enum FormResponse {
    /// The respondent closed a simple or custom form without answering
    Closed,

    /// Modal answer; a closed modal counts as `false`
    Bool(bool),

    /// Label of the pressed simple form button
    Button(Label),

    /// Custom form values keyed by slot label, in element order
    Fields(ResponseMap),

    /// Untouched payload from a body without response processing
    Raw(Value),
}

impl FormResponse {
    pub fn is_closed(&self) -> bool {
        matches!(self, FormResponse::Closed)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FormResponse::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_button(&self) -> Option<&Label> {
        match self {
            FormResponse::Button(label) => Some(label),
            _ => None,
        }
    }

    pub fn as_fields(&self) -> Option<&ResponseMap> {
        match self {
            FormResponse::Fields(map) => Some(map),
            _ => None,
        }
    }
}

impl Serialize for FormResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FormResponse::Closed => serializer.serialize_none(),
            FormResponse::Bool(b) => serializer.serialize_bool(*b),
            FormResponse::Button(label) => label.serialize(serializer),
            FormResponse::Fields(map) => map.serialize(serializer),
            FormResponse::Raw(value) => value.serialize(serializer),
        }
    }
}

/// Label-keyed custom form values, kept in insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResponseMap {
    entries: Vec<(Label, Value)>,
}

impl ResponseMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Insert a value. Labels are matched by their JSON key, so `0` and
    /// `"0"` are the same entry. A repeated key keeps its first position
    /// and takes the newer value.
    pub fn insert(&mut self, label: Label, value: Value) {
        let key = label.as_key();
        match self.entries.iter_mut().find(|(l, _)| l.as_key() == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((label, value)),
        }
    }

    pub fn get(&self, label: impl Into<Label>) -> Option<&Value> {
        let key = label.into().as_key();
        self.entries
            .iter()
            .find(|(l, _)| l.as_key() == key)
            .map(|(_, v)| v)
    }

    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.entries.iter().map(|(l, _)| l)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Label, &Value)> {
        self.entries.iter().map(|(l, v)| (l, v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ResponseMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, value) in &self.entries {
            map.serialize_entry(&label.as_key(), value)?;
        }
        map.end()
    }
}
