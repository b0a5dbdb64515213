//! Envelope construction.
//!
//! [`Formatter`] is the seam responders build envelopes through;
//! [`DefaultFormatter`] is the stock implementation. Formatters hold no
//! per-request state and are shared across requests behind an `Arc`.

use serde_json::{Map, Value};

use crate::envelope::Envelope;
use crate::error::{CoreError, CoreResult};
use crate::options::FormatOptions;
use crate::page::Page;

/// Builds response envelopes from raw data or paginated results.
pub trait Formatter: Send + Sync {
    /// Build the canonical envelope.
    ///
    /// `payload` is used as is; wrapping plain data into an array is the
    /// caller's concern.
    fn data(
        &self,
        payload: Option<Value>,
        message: &str,
        code: u32,
        errors: Option<Value>,
    ) -> Envelope;

    /// Build an envelope whose `data` holds the page items and pagination
    /// metadata.
    ///
    /// Fails with [`CoreError::InvalidArgument`] on malformed page metadata.
    fn paginator(&self, page: &Page, message: &str, code: u32) -> CoreResult<Envelope>;

    /// Turn an envelope into the response body.
    fn render(&self, envelope: &Envelope) -> Value {
        envelope.render(&FormatOptions::default())
    }
}

/// Stock formatter, configured by [`FormatOptions`].
#[derive(Debug, Clone, Default)]
pub struct DefaultFormatter {
    options: FormatOptions,
}

impl DefaultFormatter {
    /// Create a formatter, rejecting inconsistent options.
    pub fn new(options: FormatOptions) -> CoreResult<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }
}

impl Formatter for DefaultFormatter {
    fn data(
        &self,
        payload: Option<Value>,
        message: &str,
        code: u32,
        errors: Option<Value>,
    ) -> Envelope {
        Envelope {
            code,
            message: message.to_string(),
            data: payload,
            errors,
        }
    }

    fn paginator(&self, page: &Page, message: &str, code: u32) -> CoreResult<Envelope> {
        page.validate()?;

        let mut data = Map::new();
        data.insert(
            self.options.items_key.clone(),
            Value::Array(page.items().to_vec()),
        );

        match serde_json::to_value(page.meta())? {
            Value::Object(meta) => data.extend(meta),
            other => {
                return Err(CoreError::InvalidArgument(format!(
                    "pagination metadata must be an object, got {other}"
                )))
            }
        }

        Ok(self.data(Some(Value::Object(data)), message, code, None))
    }

    fn render(&self, envelope: &Envelope) -> Value {
        envelope.render(&self.options)
    }
}
