use std::path::Path;
use std::sync::{Arc, Mutex};

use serde::Serialize;
use serde_json::Value;

use crate::cli::config::Settings;
use crate::form::{
    body::{FormBody, FormDefinition},
    error::FormError,
    form::Form,
    response::FormResponse,
    slot::SlotRule,
};
use crate::trace::logger::TraceLogger;

// ============================================================================
// Form loading
// ============================================================================

/// Load a form definition. `.json` files are read as JSON, anything else as YAML.
pub fn load_form(path: &str) -> Result<FormDefinition, FormError> {
    let content = std::fs::read_to_string(path).map_err(|source| FormError::Io {
        path: path.to_string(),
        source,
    })?;
    parse_form(&content, is_json_path(path), path)
}

pub fn parse_form(content: &str, json: bool, context: &str) -> Result<FormDefinition, FormError> {
    if json {
        serde_json::from_str(content).map_err(|source| FormError::JsonParse {
            context: context.to_string(),
            source,
        })
    } else {
        serde_yaml::from_str(content).map_err(|source| FormError::YamlParse {
            context: context.to_string(),
            source,
        })
    }
}

fn is_json_path(path: &str) -> bool {
    Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool, context: &str) -> Result<String, FormError> {
    let result = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    result.map_err(|source| FormError::JsonParse {
        context: context.to_string(),
        source,
    })
}

// ============================================================================
// render subcommand
// ============================================================================

pub fn render_payload(form: &FormDefinition, pretty: bool) -> Result<String, FormError> {
    to_json(form, pretty, "form payload")
}

pub fn cmd_render(form_path: &str, settings: &Settings) -> Result<(), FormError> {
    let form = load_form(form_path)?;
    if settings.verbose > 0 {
        eprintln!(
            "Rendering {} form (sha1 {})",
            form.form_type(),
            form.fingerprint().unwrap_or_default()
        );
    }
    println!("{}", render_payload(&form, settings.pretty)?);
    Ok(())
}

// ============================================================================
// validate subcommand
// ============================================================================

/// Run `raw` through a form's dispatch and return the rendered callback payload.
pub fn validate_response(
    form: FormDefinition,
    raw: &Value,
    pretty: bool,
    tracer: Option<Arc<TraceLogger>>,
) -> Result<String, FormError> {
    let delivered: Arc<Mutex<Option<FormResponse>>> = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&delivered);

    let mut form = Form::new(form).on_response(move |_respondent: &String, response| {
        if let Ok(mut slot) = sink.lock() {
            *slot = Some(response);
        }
    });
    if let Some(tracer) = tracer {
        form = form.with_tracer(tracer);
    }

    form.handle_response(&"cli".to_string(), raw)?;

    let response = delivered
        .lock()
        .ok()
        .and_then(|mut slot| slot.take())
        .unwrap_or(FormResponse::Closed);
    to_json(&response, pretty, "remapped response")
}

/// Validate a response and print the remapped result. Returns whether it was accepted.
pub fn cmd_validate(form_path: &str, response: &str, settings: &Settings) -> Result<bool, FormError> {
    let form = load_form(form_path)?;
    let raw: Value = serde_json::from_str(response).map_err(|source| FormError::JsonParse {
        context: "response".to_string(),
        source,
    })?;

    let tracer = settings
        .trace_path
        .as_deref()
        .map(|path| Arc::new(TraceLogger::new(path)));

    if settings.verbose > 0 {
        eprintln!("Validating response against {} form {}", form.form_type(), form_path);
    }

    match validate_response(form, &raw, settings.pretty, tracer) {
        Ok(output) => {
            println!("{}", output);
            Ok(true)
        }
        Err(FormError::Validation(e)) => {
            eprintln!("Rejected: {}", e);
            Ok(false)
        }
        Err(e) => Err(e),
    }
}

// ============================================================================
// slots subcommand
// ============================================================================

/// Human-readable listing of what each response position accepts.
pub fn format_slots(form: &FormDefinition) -> String {
    let mut out = String::new();

    match form {
        FormDefinition::Simple(simple) => {
            out.push_str("simple form: integer button index or null\n");
            for (i, (button, label)) in simple.buttons().iter().zip(simple.label_map()).enumerate() {
                out.push_str(&format!("  [{}] {:?} -> {}\n", i, button.text, label));
            }
        }
        FormDefinition::Modal(modal) => {
            out.push_str("modal form: boolean or null (null reads as false)\n");
            out.push_str(&format!("  true  -> {:?}\n", modal.get_button1()));
            out.push_str(&format!("  false -> {:?}\n", modal.get_button2()));
        }
        FormDefinition::Custom(custom) => {
            out.push_str(&format!(
                "custom form: array of {} values or null\n",
                custom.slots().len()
            ));
            for (i, slot) in custom.slots().iter().enumerate() {
                out.push_str(&format!("  [{}] {} : {}\n", i, slot.label, describe_rule(&slot.rule)));
            }
        }
    }

    out
}

fn describe_rule(rule: &SlotRule) -> String {
    match rule {
        SlotRule::Null => "null".to_string(),
        SlotRule::Bool => "boolean".to_string(),
        SlotRule::Number { min, max } => format!("number in [{}, {}]", min, max),
        SlotRule::Index { len } => format!("integer index in [0, {})", len),
        SlotRule::Text => "string".to_string(),
    }
}

pub fn cmd_slots(form_path: &str) -> Result<(), FormError> {
    let form = load_form(form_path)?;
    print!("{}", format_slots(&form));
    Ok(())
}
