use std::sync::{Arc, Mutex};

use form_api::{Form, FormBody, FormDefinition, FormResponse, Label, ResponseCallback};
use serde::Serialize;
use serde_json::{json, Value};

mod common;

type Received = Arc<Mutex<Vec<(String, FormResponse)>>>;

fn recording_callback(received: &Received) -> impl Fn(&String, FormResponse) + Send + Sync + 'static {
    let received = Arc::clone(received);
    move |player: &String, response: FormResponse| received.lock().unwrap().push((player.clone(), response))
}

// =========================================================================
// Callback invocation
// =========================================================================

#[test]
fn callback_receives_remapped_response() {
    let received = Received::default();
    let form = Form::new(common::play_or_quit()).on_response(recording_callback(&received));

    form.handle_response(&"Steve".to_string(), &json!(1)).unwrap();

    let calls = received.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "Steve");
    assert_eq!(calls[0].1, FormResponse::Button(Label::Named("quit".into())));
}

#[test]
fn callback_not_called_on_validation_failure() {
    let received = Received::default();
    let form = Form::new(common::toggle_and_slider()).on_response(recording_callback(&received));

    let err = form
        .handle_response(&"Alex".to_string(), &json!([true, 15]))
        .unwrap_err();

    assert_eq!(err.to_string(), "invalid type for element 1");
    assert!(received.lock().unwrap().is_empty());
}

#[test]
fn closed_form_still_reaches_callback() {
    let received = Received::default();
    let form = Form::new(common::confirm_modal()).on_response(recording_callback(&received));

    form.handle_response(&"Steve".to_string(), &Value::Null).unwrap();

    assert_eq!(received.lock().unwrap()[0].1, FormResponse::Bool(false));
}

#[test]
fn missing_callback_succeeds_silently() {
    let form: Form<_, String> = Form::new(common::pick_one());
    assert!(form.callback().is_none());
    assert!(form.handle_response(&"Steve".to_string(), &json!([0])).is_ok());
    assert!(form.handle_response(&"Steve".to_string(), &json!([9])).is_err());
}

#[test]
fn callback_can_be_replaced_and_removed() {
    let first = Received::default();
    let second = Received::default();

    let mut form = Form::new(common::confirm_modal()).on_response(recording_callback(&first));
    let replacement: ResponseCallback<String> = Box::new(recording_callback(&second));
    form.set_callback(Some(replacement));
    form.handle_response(&"Steve".to_string(), &json!(true)).unwrap();

    form.set_callback(None);
    form.handle_response(&"Steve".to_string(), &json!(true)).unwrap();

    assert!(first.lock().unwrap().is_empty());
    assert_eq!(second.lock().unwrap().len(), 1);
}

#[test]
fn one_form_serves_several_respondents() {
    let received = Received::default();
    let form = Form::new(FormDefinition::from(common::toggle_and_slider()))
        .on_response(recording_callback(&received));

    form.handle_response(&"Steve".to_string(), &json!([true, 1])).unwrap();
    form.handle_response(&"Alex".to_string(), &json!([false, 9])).unwrap();

    let calls = received.lock().unwrap();
    assert_eq!(calls[0].0, "Steve");
    assert_eq!(calls[1].0, "Alex");
    assert_eq!(
        serde_json::to_value(&calls[1].1).unwrap(),
        json!({"0": false, "1": 9})
    );
}

#[test]
fn form_serializes_as_its_body() {
    let form: Form<_, String> = Form::new(common::confirm_modal());
    assert_eq!(
        serde_json::to_value(&form).unwrap(),
        serde_json::to_value(common::confirm_modal()).unwrap()
    );
}

#[test]
fn body_can_be_edited_before_dispatch() {
    let mut form: Form<_, String> = Form::new(common::play_or_quit());
    form.body_mut().set_title("Main menu");
    assert_eq!(form.body().get_title(), "Main menu");
    assert_eq!(form.into_body().get_title(), "Main menu");
}

// =========================================================================
// Bodies without response processing
// =========================================================================

#[derive(Serialize)]
struct Notice {
    #[serde(rename = "type")]
    kind: &'static str,
    text: String,
}

impl FormBody for Notice {
    fn form_type(&self) -> &'static str {
        self.kind
    }
}

#[test]
fn default_processing_passes_payload_through() {
    let received = Received::default();
    let form = Form::new(Notice {
        kind: "notice",
        text: "Server restarts in 5 minutes".into(),
    })
    .on_response(recording_callback(&received));

    form.handle_response(&"Steve".to_string(), &json!({"any": "thing"})).unwrap();

    assert_eq!(
        received.lock().unwrap()[0].1,
        FormResponse::Raw(json!({"any": "thing"}))
    );
}
