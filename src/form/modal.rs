use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::form::{
    body::FormBody,
    error::{type_name, ValidationError},
    response::FormResponse,
};

/// Two-button yes/no dialog. `button1` answers `true`, `button2` answers `false`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename = "modal", from = "ModalFormData")]
pub struct ModalForm {
    title: String,
    content: String,
    button1: String,
    button2: String,
}

#[derive(Deserialize)]
struct ModalFormData {
    #[serde(default)]
    title: String,
    #[serde(default)]
    content: String,
    #[serde(default)]
    button1: String,
    #[serde(default)]
    button2: String,
}

impl From<ModalFormData> for ModalForm {
    fn from(data: ModalFormData) -> Self {
        ModalForm {
            title: data.title,
            content: data.content,
            button1: data.button1,
            button2: data.button2,
        }
    }
}

impl ModalForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn button1(mut self, text: impl Into<String>) -> Self {
        self.button1 = text.into();
        self
    }

    pub fn button2(mut self, text: impl Into<String>) -> Self {
        self.button2 = text.into();
        self
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn set_button1(&mut self, text: impl Into<String>) {
        self.button1 = text.into();
    }

    pub fn set_button2(&mut self, text: impl Into<String>) {
        self.button2 = text.into();
    }

    pub fn get_title(&self) -> &str {
        &self.title
    }

    pub fn get_content(&self) -> &str {
        &self.content
    }

    pub fn get_button1(&self) -> &str {
        &self.button1
    }

    pub fn get_button2(&self) -> &str {
        &self.button2
    }
}

impl FormBody for ModalForm {
    fn form_type(&self) -> &'static str {
        "modal"
    }

    /// A closed modal is read as a decline.
    fn process_response(&self, raw: &Value) -> Result<FormResponse, ValidationError> {
        match raw {
            Value::Null => Ok(FormResponse::Bool(false)),
            Value::Bool(b) => Ok(FormResponse::Bool(*b)),
            other => Err(ValidationError::ExpectedBoolean {
                got: type_name(other),
            }),
        }
    }
}
