use std::sync::Arc;

use form_api::{Form, TraceEvent, TraceLogger};
use form_api::trace::trace::Outcome;
use serde_json::{json, Value};

mod common;

fn trace_file(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join("form_api_trace_test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    let _ = std::fs::remove_file(&path);
    path
}

fn read_events(path: &std::path::Path) -> Vec<Value> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn each_dispatch_appends_one_line() {
    let path = trace_file("dispatch.jsonl");
    let tracer = Arc::new(TraceLogger::new(&path));
    assert!(tracer.is_enabled());

    let form: Form<_, String> = Form::new(common::toggle_and_slider()).with_tracer(tracer);
    let steve = "Steve".to_string();

    form.handle_response(&steve, &json!([true, 5])).unwrap();
    form.handle_response(&steve, &json!(null)).unwrap();
    assert!(form.handle_response(&steve, &json!([true])).is_err());

    let events = read_events(&path);
    assert_eq!(events.len(), 3);

    assert_eq!(events[0]["form_type"], json!("custom_form"));
    assert_eq!(events[0]["outcome"], json!("accepted"));
    assert_eq!(events[0]["values"], json!(2));
    assert_eq!(events[0]["fingerprint"].as_str().unwrap().len(), 40);

    assert_eq!(events[1]["outcome"], json!("closed"));

    assert_eq!(events[2]["outcome"], json!("rejected"));
    assert_eq!(events[2]["error"], json!("expected array of size 2, got 1"));
}

#[test]
fn event_builder_fields() {
    let event = TraceEvent::now("modal", Outcome::Accepted)
        .with_values(1)
        .with_fingerprint("abc");
    let value = serde_json::to_value(&event).unwrap();

    assert_eq!(value["form_type"], json!("modal"));
    assert_eq!(value["values"], json!(1));
    assert_eq!(value["fingerprint"], json!("abc"));
    assert_eq!(value["error"], Value::Null);
    assert!(value["timestamp_ms"].as_u64().unwrap() > 0);
}

#[test]
fn disabled_logger_is_a_no_op() {
    let tracer = Arc::new(TraceLogger::disabled());
    assert!(!tracer.is_enabled());

    assert!(tracer.path().is_none());
    assert!(!tracer.log(&TraceEvent::now("modal", Outcome::Accepted)));
    assert_eq!(tracer.dropped(), 0, "disabled tracing drops nothing");

    let form: Form<_, String> = Form::new(common::confirm_modal()).with_tracer(tracer);
    assert!(form.handle_response(&"Steve".to_string(), &json!(true)).is_ok());
}

#[test]
fn unopenable_path_disables_tracing() {
    let dir = std::env::temp_dir().join("form_api_trace_test");
    std::fs::create_dir_all(&dir).unwrap();

    let tracer = TraceLogger::new(&dir);
    assert!(!tracer.is_enabled());
    assert!(!tracer.log(&TraceEvent::now("form", Outcome::Closed)));
}

#[test]
fn written_events_are_not_counted_as_dropped() {
    let path = trace_file("written.jsonl");
    let tracer = TraceLogger::new(&path);

    assert_eq!(tracer.path(), Some(path.as_path()));
    assert!(tracer.log(&TraceEvent::now("custom_form", Outcome::Rejected).with_error("bad")));
    assert_eq!(tracer.dropped(), 0);
    assert_eq!(read_events(&path)[0]["error"], json!("bad"));
}
