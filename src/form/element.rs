use serde::{Deserialize, Serialize};

use crate::form::slot::SlotRule;

// ============================================================================
// Custom form elements, serialized exactly as the client expects them
// ============================================================================

/// One entry of a custom form's `content` array.
///
/// Every kind except `label` occupies a response slot. The slot label set on
/// an element builder is kept on the Rust side only and never reaches the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    Label(TextLabel),
    Header(Header),
    Divider(Divider),
    Toggle(Toggle),
    Slider(Slider),
    StepSlider(StepSlider),
    Dropdown(Dropdown),
    Input(Input),
}

impl Element {
    /// Predicate for this element's response slot, or `None` for plain labels.
    pub fn slot_rule(&self) -> Option<SlotRule> {
        match self {
            Element::Label(_) => None,
            Element::Header(_) | Element::Divider(_) => Some(SlotRule::Null),
            Element::Toggle(_) => Some(SlotRule::Bool),
            Element::Slider(s) => Some(SlotRule::Number {
                min: s.min,
                max: s.max,
            }),
            Element::StepSlider(s) => Some(SlotRule::Index { len: s.steps.len() }),
            Element::Dropdown(d) => Some(SlotRule::Index {
                len: d.options.len(),
            }),
            Element::Input(_) => Some(SlotRule::Text),
        }
    }

    /// Caller-supplied slot label, if any.
    pub fn slot_label(&self) -> Option<&str> {
        let label = match self {
            Element::Label(_) => &None,
            Element::Header(e) => &e.label,
            Element::Divider(e) => &e.label,
            Element::Toggle(e) => &e.label,
            Element::Slider(e) => &e.label,
            Element::StepSlider(e) => &e.label,
            Element::Dropdown(e) => &e.label,
            Element::Input(e) => &e.label,
        };
        label.as_deref()
    }

    pub fn text(&self) -> &str {
        match self {
            Element::Label(e) => &e.text,
            Element::Header(e) => &e.text,
            Element::Divider(e) => &e.text,
            Element::Toggle(e) => &e.text,
            Element::Slider(e) => &e.text,
            Element::StepSlider(e) => &e.text,
            Element::Dropdown(e) => &e.text,
            Element::Input(e) => &e.text,
        }
    }
}

/// Static text. Takes no response slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLabel {
    pub text: String,
}

impl TextLabel {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Section header. The client answers its slot with null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Header {
    pub text: String,
    #[serde(default, skip_serializing)]
    pub label: Option<String>,
}

impl Header {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Horizontal rule. Always sent with empty text; its slot is answered with null.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Divider {
    #[serde(default, skip_deserializing)]
    text: String,
    #[serde(default, skip_serializing)]
    pub label: Option<String>,
}

impl Divider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Toggle {
    pub text: String,
    #[serde(rename = "default", skip_serializing_if = "Option::is_none")]
    pub default_value: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    #[serde(default, skip_serializing)]
    pub label: Option<String>,
}

impl Toggle {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            default_value: None,
            tooltip: None,
            label: None,
        }
    }

    pub fn default_value(mut self, value: bool) -> Self {
        self.default_value = Some(value);
        self
    }

    pub fn tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Numeric slider. Any number in `[min, max]` is accepted back, whole or not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slider {
    pub text: String,
    pub min: i64,
    pub max: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<i64>,
    #[serde(rename = "default", skip_serializing_if = "Option::is_none")]
    pub default_value: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    #[serde(default, skip_serializing)]
    pub label: Option<String>,
}

impl Slider {
    pub fn new(text: impl Into<String>, min: i64, max: i64) -> Self {
        Self {
            text: text.into(),
            min,
            max,
            step: None,
            default_value: None,
            tooltip: None,
            label: None,
        }
    }

    pub fn step(mut self, step: i64) -> Self {
        self.step = Some(step);
        self
    }

    pub fn default_value(mut self, value: i64) -> Self {
        self.default_value = Some(value);
        self
    }

    pub fn tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Slider over named steps. Answered with the index of the chosen step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepSlider {
    pub text: String,
    pub steps: Vec<String>,
    #[serde(rename = "default", skip_serializing_if = "Option::is_none")]
    pub default_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    #[serde(default, skip_serializing)]
    pub label: Option<String>,
}

impl StepSlider {
    pub fn new<S: Into<String>>(text: impl Into<String>, steps: impl IntoIterator<Item = S>) -> Self {
        Self {
            text: text.into(),
            steps: steps.into_iter().map(Into::into).collect(),
            default_index: None,
            tooltip: None,
            label: None,
        }
    }

    pub fn default_index(mut self, index: usize) -> Self {
        self.default_index = Some(index);
        self
    }

    pub fn tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Drop-down list. Answered with the index of the chosen option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dropdown {
    pub text: String,
    pub options: Vec<String>,
    #[serde(rename = "default", skip_serializing_if = "Option::is_none")]
    pub default_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    #[serde(default, skip_serializing)]
    pub label: Option<String>,
}

impl Dropdown {
    pub fn new<S: Into<String>>(text: impl Into<String>, options: impl IntoIterator<Item = S>) -> Self {
        Self {
            text: text.into(),
            options: options.into_iter().map(Into::into).collect(),
            default_index: None,
            tooltip: None,
            label: None,
        }
    }

    pub fn default_index(mut self, index: usize) -> Self {
        self.default_index = Some(index);
        self
    }

    pub fn tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Free text field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Input {
    pub text: String,
    #[serde(default)]
    pub placeholder: String,
    #[serde(rename = "default", skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    #[serde(default, skip_serializing)]
    pub label: Option<String>,
}

impl Input {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            placeholder: String::new(),
            default_value: None,
            tooltip: None,
            label: None,
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

macro_rules! impl_into_element {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Element {
                fn from(e: $ty) -> Self {
                    Element::$variant(e)
                }
            }
        )*
    };
}

impl_into_element! {
    TextLabel => Label,
    Header => Header,
    Divider => Divider,
    Toggle => Toggle,
    Slider => Slider,
    StepSlider => StepSlider,
    Dropdown => Dropdown,
    Input => Input,
}
