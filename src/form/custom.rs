use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::form::{
    body::FormBody,
    element::{Divider, Dropdown, Element, Header, Input, Slider, StepSlider, TextLabel, Toggle},
    error::{type_name, ValidationError},
    response::{FormResponse, ResponseMap},
    slot::{Label, Slot, SlotRule},
};

/// Form with an ordered list of input elements.
///
/// Every element except a plain label owns one response slot. Slots are
/// appended in the same call that appends the element, so the label map and
/// the predicate list always line up with the client's response array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "custom_form", from = "CustomFormData")]
pub struct CustomForm {
    title: String,
    content: Vec<Element>,
    #[serde(skip)]
    slots: Vec<Slot>,
}

#[derive(Deserialize)]
struct CustomFormData {
    #[serde(default)]
    title: String,
    #[serde(default)]
    content: Vec<Element>,
}

impl From<CustomFormData> for CustomForm {
    fn from(data: CustomFormData) -> Self {
        data.content
            .into_iter()
            .fold(CustomForm::new().title(data.title), |form, element| form.add(element))
    }
}

impl CustomForm {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            content: Vec::new(),
            slots: Vec::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn get_title(&self) -> &str {
        &self.title
    }

    /// Append an element, registering its response slot if it has one.
    pub fn add(mut self, element: impl Into<Element>) -> Self {
        let element = element.into();
        if let Some(rule) = element.slot_rule() {
            let label = Label::resolve(element.slot_label().map(str::to_string), self.slots.len());
            self.slots.push(Slot::new(label, rule));
        }
        self.content.push(element);
        self
    }

    pub fn add_label(self, text: impl Into<String>) -> Self {
        self.add(TextLabel::new(text))
    }

    pub fn add_header(self, text: impl Into<String>) -> Self {
        self.add(Header::new(text))
    }

    pub fn add_divider(self) -> Self {
        self.add(Divider::new())
    }

    pub fn add_toggle(self, text: impl Into<String>) -> Self {
        self.add(Toggle::new(text))
    }

    pub fn add_slider(self, text: impl Into<String>, min: i64, max: i64) -> Self {
        self.add(Slider::new(text, min, max))
    }

    pub fn add_step_slider<S: Into<String>>(
        self,
        text: impl Into<String>,
        steps: impl IntoIterator<Item = S>,
    ) -> Self {
        self.add(StepSlider::new(text, steps))
    }

    pub fn add_dropdown<S: Into<String>>(
        self,
        text: impl Into<String>,
        options: impl IntoIterator<Item = S>,
    ) -> Self {
        self.add(Dropdown::new(text, options))
    }

    pub fn add_input(self, text: impl Into<String>, placeholder: impl Into<String>) -> Self {
        self.add(Input::new(text).placeholder(placeholder))
    }

    pub fn elements(&self) -> &[Element] {
        &self.content
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn label_map(&self) -> impl Iterator<Item = &Label> {
        self.slots.iter().map(|s| &s.label)
    }

    pub fn validators(&self) -> impl Iterator<Item = &SlotRule> {
        self.slots.iter().map(|s| &s.rule)
    }
}

impl Default for CustomForm {
    fn default() -> Self {
        Self::new()
    }
}

impl FormBody for CustomForm {
    fn form_type(&self) -> &'static str {
        "custom_form"
    }

    fn process_response(&self, raw: &Value) -> Result<FormResponse, ValidationError> {
        let values = match raw {
            Value::Null => return Ok(FormResponse::Closed),
            Value::Array(values) => values,
            other => {
                return Err(ValidationError::ExpectedArray {
                    got: type_name(other),
                })
            }
        };

        if values.len() != self.slots.len() {
            return Err(ValidationError::SizeMismatch {
                expected: self.slots.len(),
                got: values.len(),
            });
        }

        let mut fields = ResponseMap::with_capacity(values.len());
        for (i, value) in values.iter().enumerate() {
            let slot = self.slots.get(i).ok_or(ValidationError::InvalidElement(i))?;
            if !slot.rule.accepts(value) {
                return Err(ValidationError::InvalidType(slot.label.clone()));
            }
            fields.insert(slot.label.clone(), value.clone());
        }

        Ok(FormResponse::Fields(fields))
    }
}
