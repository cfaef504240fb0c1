use form_api::{Button, FormBody, FormResponse, Label, SimpleForm, ValidationError};
use serde_json::json;

mod common;

// =========================================================================
// Button label map
// =========================================================================

#[test]
fn unlabelled_buttons_fall_back_to_their_index() {
    let form = SimpleForm::new()
        .add_button(Button::new("A"))
        .add_button(Button::new("B").label("b"))
        .add_button(Button::new("C"));

    assert_eq!(
        form.label_map(),
        &[Label::Index(0), Label::Named("b".into()), Label::Index(2)]
    );
}

// =========================================================================
// Scenario B
// =========================================================================

#[test]
fn pressed_button_is_remapped_to_its_label() {
    let form = common::play_or_quit();

    assert_eq!(
        form.process_response(&json!(0)).unwrap(),
        FormResponse::Button(Label::Index(0))
    );
    assert_eq!(
        form.process_response(&json!(1)).unwrap(),
        FormResponse::Button(Label::Named("quit".into()))
    );
}

#[test]
fn missing_button_is_rejected() {
    let form = common::play_or_quit();

    let err = form.process_response(&json!(5)).unwrap_err();
    assert_eq!(err.to_string(), "button 5 does not exist");

    let err = form.process_response(&json!(-1)).unwrap_err();
    assert_eq!(err.to_string(), "button -1 does not exist");

    let err = form.process_response(&json!(2)).unwrap_err();
    assert!(matches!(err, ValidationError::ButtonNotFound(_)));
}

#[test]
fn closed_menu_stays_closed() {
    let form = common::play_or_quit();
    assert_eq!(form.process_response(&json!(null)).unwrap(), FormResponse::Closed);
}

#[test]
fn non_integer_response_is_rejected() {
    let form = common::play_or_quit();

    for (raw, got) in [
        (json!(1.0), "float"),
        (json!("1"), "string"),
        (json!(true), "boolean"),
        (json!([0]), "array"),
        (json!({"button": 0}), "object"),
    ] {
        let err = form.process_response(&raw).unwrap_err();
        assert_eq!(err.to_string(), format!("expected integer, got {}", got), "raw = {}", raw);
    }
}

#[test]
fn empty_menu_accepts_only_null() {
    let form = SimpleForm::new();
    assert!(form.process_response(&json!(null)).unwrap().is_closed());
    assert!(form.process_response(&json!(0)).is_err());
}

// =========================================================================
// Payload fields
// =========================================================================

#[test]
fn title_and_content_setters() {
    let mut form = SimpleForm::new().title("Old");
    form.set_title("New");
    form.set_content("Body");
    assert_eq!(form.get_title(), "New");
    assert_eq!(form.get_content(), "Body");
}

#[test]
fn image_with_empty_path_is_dropped() {
    let form = common::shop_menu();
    let buttons = form.buttons();
    assert!(buttons[0].image.is_some());
    assert!(buttons[1].image.is_some());
    assert!(buttons[2].image.is_none(), "empty image path must not be sent");
}
