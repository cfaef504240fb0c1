use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::form::{
    custom::CustomForm,
    error::ValidationError,
    modal::ModalForm,
    response::FormResponse,
    simple::SimpleForm,
};

/// Payload of a form plus the rules for reading the client's answer to it.
///
/// The serialized body is the exact object sent to the client, `type` first.
pub trait FormBody: Serialize {
    /// Wire `type` of this payload.
    fn form_type(&self) -> &'static str;

    /// Validate a raw client response and remap it for the callback.
    ///
    /// Bodies that expect no structured answer hand the payload through.
    fn process_response(&self, raw: &Value) -> Result<FormResponse, ValidationError> {
        Ok(FormResponse::Raw(raw.clone()))
    }

    fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// SHA-1 of the serialized payload, hex encoded.
    fn fingerprint(&self) -> Option<String> {
        self.to_json_string().ok().map(|json| text_fingerprint(&json))
    }
}

pub fn text_fingerprint(text: &str) -> String {
    use sha1::{Digest, Sha1};

    let mut hasher = Sha1::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Any of the three built-in forms, selected by the wire `type` field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum FormDefinition {
    #[serde(rename = "form")]
    Simple(SimpleForm),
    #[serde(rename = "modal")]
    Modal(ModalForm),
    #[serde(rename = "custom_form")]
    Custom(CustomForm),
}

impl Serialize for FormDefinition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FormDefinition::Simple(form) => form.serialize(serializer),
            FormDefinition::Modal(form) => form.serialize(serializer),
            FormDefinition::Custom(form) => form.serialize(serializer),
        }
    }
}

impl FormBody for FormDefinition {
    fn form_type(&self) -> &'static str {
        match self {
            FormDefinition::Simple(form) => form.form_type(),
            FormDefinition::Modal(form) => form.form_type(),
            FormDefinition::Custom(form) => form.form_type(),
        }
    }

    fn process_response(&self, raw: &Value) -> Result<FormResponse, ValidationError> {
        match self {
            FormDefinition::Simple(form) => form.process_response(raw),
            FormDefinition::Modal(form) => form.process_response(raw),
            FormDefinition::Custom(form) => form.process_response(raw),
        }
    }
}

impl From<SimpleForm> for FormDefinition {
    fn from(form: SimpleForm) -> Self {
        FormDefinition::Simple(form)
    }
}

impl From<ModalForm> for FormDefinition {
    fn from(form: ModalForm) -> Self {
        FormDefinition::Modal(form)
    }
}

impl From<CustomForm> for FormDefinition {
    fn from(form: CustomForm) -> Self {
        FormDefinition::Custom(form)
    }
}
