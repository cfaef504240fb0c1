use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::form::{body::FormBody, error::ValidationError, response::FormResponse};

/// One dispatched response, as written to the trace file.
#[derive(Debug, Serialize)]
pub struct TraceEvent {
    pub timestamp_ms: u128,

    pub form_type: String,
    pub fingerprint: Option<String>,

    pub outcome: Outcome,

    /// Number of values delivered to the callback
    pub values: Option<usize>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Accepted,
    Closed,
    Rejected,
}

impl TraceEvent {
    pub fn now(form_type: impl ToString, outcome: Outcome) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or_default(),
            form_type: form_type.to_string(),
            fingerprint: None,
            outcome,
            values: None,
            error: None,
        }
    }

    pub fn for_dispatch<B: FormBody + ?Sized>(
        body: &B,
        result: &Result<FormResponse, ValidationError>,
    ) -> Self {
        let event = match result {
            Ok(FormResponse::Closed) => Self::now(body.form_type(), Outcome::Closed),
            Ok(response) => {
                let values = match response {
                    FormResponse::Fields(map) => map.len(),
                    _ => 1,
                };
                Self::now(body.form_type(), Outcome::Accepted).with_values(values)
            }
            Err(e) => Self::now(body.form_type(), Outcome::Rejected).with_error(e),
        };
        match body.fingerprint() {
            Some(fp) => event.with_fingerprint(fp),
            None => event,
        }
    }

    pub fn with_fingerprint(mut self, fingerprint: impl ToString) -> Self {
        self.fingerprint = Some(fingerprint.to_string());
        self
    }

    pub fn with_values(mut self, values: usize) -> Self {
        self.values = Some(values);
        self
    }

    pub fn with_error(mut self, error: impl ToString) -> Self {
        self.error = Some(error.to_string());
        self
    }
}
