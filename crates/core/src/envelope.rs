//! The canonical response envelope.
//!
//! Every response body has the shape
//!
//! ```json
//! { "code": 200, "message": "", "data": [...], "errors": null }
//! ```
//!
//! Success responses populate `data` and leave `errors` null; failures set
//! `data` to null and may carry diagnostic `errors`.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::options::{Field, FormatOptions};
use crate::status::{http_status_for, Outcome};

/// A response envelope before rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    pub code: u32,
    pub message: String,
    pub data: Option<Value>,
    pub errors: Option<Value>,
}

impl Envelope {
    /// HTTP status the envelope should be sent with.
    pub fn http_status(&self) -> u16 {
        http_status_for(self.code)
    }

    /// Outcome of the envelope. Any `errors` payload marks a failure,
    /// whatever the code says.
    pub fn outcome(&self) -> Outcome {
        match (Outcome::for_code(self.code), &self.errors) {
            (Outcome::Success, Some(_)) => Outcome::Fail,
            (outcome, _) => outcome,
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome() == Outcome::Success
    }

    /// Render into a JSON object, honouring field aliases and visibility.
    pub fn render(&self, options: &FormatOptions) -> Value {
        let mut body = Map::new();

        for field in Field::ALL {
            let opts = options.field(field);
            if !opts.show {
                continue;
            }

            let value = match field {
                Field::Status => Value::from(self.outcome().as_str()),
                Field::Code => Value::from(self.code),
                Field::Message => Value::from(self.message.as_str()),
                Field::Data => self.data.clone().unwrap_or(Value::Null),
                Field::Errors => self.errors.clone().unwrap_or(Value::Null),
            };
            body.insert(opts.alias.clone(), value);
        }

        Value::Object(body)
    }
}
