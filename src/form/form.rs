use std::{fmt, sync::Arc};

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::{
    form::{body::FormBody, error::ValidationError, response::FormResponse},
    trace::{logger::TraceLogger, trace::TraceEvent},
};

/// Called with the respondent and the remapped response after validation.
pub type ResponseCallback<P> = Box<dyn Fn(&P, FormResponse) + Send + Sync>;

/// A form body bound to its response callback.
///
/// `P` is whatever the host uses to identify the respondent. The body is
/// only read during dispatch, so one form may validate several responses.
pub struct Form<B, P> {
    body: B,
    callback: Option<ResponseCallback<P>>,
    tracer: Option<Arc<TraceLogger>>,
}

impl<B: FormBody, P> Form<B, P> {
    pub fn new(body: B) -> Self {
        Self {
            body,
            callback: None,
            tracer: None,
        }
    }

    pub fn on_response<F>(mut self, callback: F) -> Self
    where
        F: Fn(&P, FormResponse) + Send + Sync + 'static,
    {
        self.callback = Some(Box::new(callback));
        self
    }

    pub fn with_tracer(mut self, tracer: Arc<TraceLogger>) -> Self {
        self.tracer = Some(tracer);
        self
    }

    pub fn set_callback(&mut self, callback: Option<ResponseCallback<P>>) {
        self.callback = callback;
    }

    pub fn callback(&self) -> Option<&ResponseCallback<P>> {
        self.callback.as_ref()
    }

    pub fn body(&self) -> &B {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut B {
        &mut self.body
    }

    pub fn into_body(self) -> B {
        self.body
    }

    /// Validate `raw` against the body and pass the result to the callback.
    ///
    /// The callback runs at most once and only when validation succeeds.
    /// Without a callback a valid response is accepted silently.
    pub fn handle_response(&self, respondent: &P, raw: &Value) -> Result<(), ValidationError> {
        let result = self.body.process_response(raw);

        if let Some(tracer) = &self.tracer {
            tracer.log(&TraceEvent::for_dispatch(&self.body, &result));
        }

        let response = result?;
        if let Some(callback) = &self.callback {
            callback(respondent, response);
        }
        Ok(())
    }
}

impl<B: FormBody, P> Serialize for Form<B, P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.body.serialize(serializer)
    }
}

impl<B: fmt::Debug, P> fmt::Debug for Form<B, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Form")
            .field("body", &self.body)
            .field("has_callback", &self.callback.is_some())
            .field("traced", &self.tracer.is_some())
            .finish()
    }
}
