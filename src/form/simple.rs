use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::form::{
    body::FormBody,
    error::{type_name, ValidationError},
    response::FormResponse,
    slot::{as_integer, Label},
};

/// Where a button icon is loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageType {
    /// Resource pack path
    Path,
    Url,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonImage {
    #[serde(rename = "type")]
    pub image_type: ImageType,
    pub data: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Button {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ButtonImage>,
    #[serde(default, skip_serializing)]
    pub label: Option<String>,
}

impl Button {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            image: None,
            label: None,
        }
    }

    pub fn image(mut self, image_type: ImageType, data: impl Into<String>) -> Self {
        self.image = Some(ButtonImage {
            image_type,
            data: data.into(),
        });
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Menu of buttons. The client answers with the index of the pressed button,
/// which is remapped to that button's label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "form", from = "SimpleFormData")]
pub struct SimpleForm {
    title: String,
    content: String,
    buttons: Vec<Button>,
    #[serde(skip)]
    labels: Vec<Label>,
}

#[derive(Deserialize)]
struct SimpleFormData {
    #[serde(default)]
    title: String,
    #[serde(default)]
    content: String,
    #[serde(default)]
    buttons: Vec<Button>,
}

impl From<SimpleFormData> for SimpleForm {
    fn from(data: SimpleFormData) -> Self {
        data.buttons.into_iter().fold(
            SimpleForm::new().title(data.title).content(data.content),
            SimpleForm::add_button,
        )
    }
}

impl SimpleForm {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            buttons: Vec::new(),
            labels: Vec::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn get_title(&self) -> &str {
        &self.title
    }

    pub fn get_content(&self) -> &str {
        &self.content
    }

    /// Append a button and its label-map entry.
    ///
    /// An image with an empty path is dropped from the payload.
    pub fn add_button(mut self, mut button: Button) -> Self {
        if button.image.as_ref().is_some_and(|img| img.data.is_empty()) {
            button.image = None;
        }
        let label = Label::resolve(button.label.clone(), self.labels.len());
        self.buttons.push(button);
        self.labels.push(label);
        self
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    pub fn label_map(&self) -> &[Label] {
        &self.labels
    }
}

impl Default for SimpleForm {
    fn default() -> Self {
        Self::new()
    }
}

impl FormBody for SimpleForm {
    fn form_type(&self) -> &'static str {
        "form"
    }

    fn process_response(&self, raw: &Value) -> Result<FormResponse, ValidationError> {
        let n = match raw {
            Value::Null => return Ok(FormResponse::Closed),
            Value::Number(n) if as_integer(raw).is_some() => n,
            other => {
                return Err(ValidationError::ExpectedInteger {
                    got: type_name(other),
                })
            }
        };

        as_integer(raw)
            .and_then(|i| usize::try_from(i).ok())
            .filter(|&i| i < self.buttons.len())
            .and_then(|i| self.labels.get(i))
            .map(|label| FormResponse::Button(label.clone()))
            .ok_or_else(|| ValidationError::ButtonNotFound(n.clone()))
    }
}
