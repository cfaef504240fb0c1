//! Build server-side UI forms, serialize them for the client, and validate
//! the client's answer against the form it was sent.
//!
//! ```
//! use form_api::{CustomForm, Form, FormBody};
//! use serde_json::json;
//!
//! let form = CustomForm::new()
//!     .title("Settings")
//!     .add_toggle("Enable?")
//!     .add_slider("Level", 0, 10);
//!
//! let response = form.process_response(&json!([true, 5])).unwrap();
//! assert_eq!(serde_json::to_value(&response).unwrap(), json!({"0": true, "1": 5}));
//!
//! let dispatch: Form<_, String> = Form::new(form).on_response(|player: &String, response| {
//!     println!("{} answered {:?}", player, response);
//! });
//! assert!(dispatch.handle_response(&"Steve".to_string(), &json!([true, 15])).is_err());
//! ```

pub mod cli;
pub mod form;
pub mod trace;

pub use form::{
    body::{FormBody, FormDefinition},
    custom::CustomForm,
    element::{Divider, Dropdown, Element, Header, Input, Slider, StepSlider, TextLabel, Toggle},
    error::{FormError, ValidationError},
    form::{Form, ResponseCallback},
    modal::ModalForm,
    response::{FormResponse, ResponseMap},
    simple::{Button, ImageType, SimpleForm},
    slot::{Label, Slot, SlotRule},
};
pub use trace::{logger::TraceLogger, trace::TraceEvent};
