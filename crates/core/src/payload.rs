//! The data handed to a success response.

use serde::Serialize;
use serde_json::Value;

use crate::error::CoreResult;
use crate::page::{CursorPage, OffsetPage, Page};

/// Success payload: either plain structured data or a paginated result set.
///
/// Responders match on this once and pick the matching formatter branch.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Plain(Value),
    Paginated(Page),
}

impl Payload {
    /// Convert any serializable value into its structured form.
    pub fn from_serialize<T: Serialize + ?Sized>(data: &T) -> CoreResult<Self> {
        Ok(Payload::Plain(serde_json::to_value(data)?))
    }

    /// An empty plain payload (renders as `[]`).
    pub fn empty() -> Self {
        Payload::Plain(Value::Array(Vec::new()))
    }
}

impl Default for Payload {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Payload::Plain(value)
    }
}

impl From<Page> for Payload {
    fn from(page: Page) -> Self {
        Payload::Paginated(page)
    }
}

impl From<OffsetPage> for Payload {
    fn from(page: OffsetPage) -> Self {
        Payload::Paginated(Page::Offset(page))
    }
}

impl From<CursorPage> for Payload {
    fn from(page: CursorPage) -> Self {
        Payload::Paginated(Page::Cursor(page))
    }
}

/// Wrap a value into an array.
///
/// `null` becomes `[]`, arrays are kept, anything else becomes a
/// one-element array.
pub fn wrap(value: Value) -> Value {
    match value {
        Value::Null => Value::Array(Vec::new()),
        Value::Array(_) => value,
        other => Value::Array(vec![other]),
    }
}
