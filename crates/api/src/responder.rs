//! Semantic response helpers.
//!
//! [`Responder`] turns a handler outcome ("created", "not found", ...) into a
//! [`Reply`]: it picks the status code, builds the envelope through its
//! [`Formatter`] and attaches headers.
//!
//! ```ignore
//! async fn show(State(state): State<AppState>, Path(id): Path<u64>) -> Reply {
//!     match state.widgets.get(id).await {
//!         Some(widget) => state.responder.success_serialize(&widget, "", 200, HeaderMap::new()),
//!         None => state.responder.error_not_found("Widget not found"),
//!     }
//! }
//! ```

use std::sync::Arc;

use axum::http::{HeaderMap, StatusCode};
use serde::Serialize;
use serde_json::Value;

use parcel_core::envelope::Envelope;
use parcel_core::error::CoreError;
use parcel_core::formatter::{DefaultFormatter, Formatter};
use parcel_core::payload::{wrap, Payload};
use parcel_core::status::ResponseCode;

use crate::error::{AppError, INTERNAL_ERROR_MESSAGE};
use crate::reply::Reply;

/// Builds envelope replies through an injected [`Formatter`].
///
/// Cheap to clone; the formatter is shared behind an `Arc`.
#[derive(Clone)]
pub struct Responder {
    formatter: Arc<dyn Formatter>,
}

impl Default for Responder {
    fn default() -> Self {
        Self::new(Arc::new(DefaultFormatter::default()))
    }
}

impl std::fmt::Debug for Responder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Responder").finish_non_exhaustive()
    }
}

impl Responder {
    pub fn new(formatter: Arc<dyn Formatter>) -> Self {
        Self { formatter }
    }

    pub fn formatter(&self) -> &dyn Formatter {
        self.formatter.as_ref()
    }

    // -----------------------------------------------------------------------
    // Core operations
    // -----------------------------------------------------------------------

    /// Respond with data.
    ///
    /// Paginated payloads go through [`Formatter::paginator`]. Plain payloads
    /// are wrapped into an array first (`null` -> `[]`, `x` -> `[x]`).
    pub fn success(
        &self,
        data: impl Into<Payload>,
        message: &str,
        code: u32,
        headers: HeaderMap,
    ) -> Reply {
        let envelope = match data.into() {
            Payload::Paginated(page) => match self.formatter.paginator(&page, message, code) {
                Ok(envelope) => envelope,
                Err(err) => return self.internal_failure(err),
            },
            Payload::Plain(value) => self.formatter.data(Some(wrap(value)), message, code, None),
        };

        self.emit(&envelope, headers)
    }

    /// [`Responder::success`] for any serializable value.
    pub fn success_serialize<T: Serialize + ?Sized>(
        &self,
        data: &T,
        message: &str,
        code: u32,
        headers: HeaderMap,
    ) -> Reply {
        match Payload::from_serialize(data) {
            Ok(payload) => self.success(payload, message, code, headers),
            Err(err) => self.internal_failure(err),
        }
    }

    /// Respond with a failure: `data` is null, `errors` is passed through.
    pub fn fail(
        &self,
        message: &str,
        code: u32,
        errors: Option<Value>,
        headers: HeaderMap,
    ) -> Reply {
        let envelope = self.formatter.data(None, message, code, errors);
        self.emit(&envelope, headers)
    }

    /// Render an [`AppError`] through this responder's formatter.
    pub fn error(&self, err: &AppError) -> Reply {
        let (code, message, errors) = err.envelope_parts();
        self.fail(&message, code, errors, HeaderMap::new())
    }

    // -----------------------------------------------------------------------
    // Success aliases
    // -----------------------------------------------------------------------

    /// 201, with a `Location` header when `location` is given.
    pub fn created(
        &self,
        data: impl Into<Payload>,
        message: &str,
        location: Option<&str>,
    ) -> Reply {
        let reply = self.success(data, message, ResponseCode::Created.code(), HeaderMap::new());
        with_optional_location(reply, location)
    }

    /// 202, with a `Location` header when `location` is given.
    pub fn accepted(
        &self,
        data: impl Into<Payload>,
        message: &str,
        location: Option<&str>,
    ) -> Reply {
        let reply = self.success(data, message, ResponseCode::Accepted.code(), HeaderMap::new());
        with_optional_location(reply, location)
    }

    /// 204 with empty data.
    pub fn no_content(&self, message: &str) -> Reply {
        self.success(
            Payload::empty(),
            message,
            ResponseCode::NoContent.code(),
            HeaderMap::new(),
        )
    }

    /// Success without data.
    pub fn ok(&self, message: &str, code: u32, headers: HeaderMap) -> Reply {
        self.success(Payload::empty(), message, code, headers)
    }

    /// Success without data or message; clients localize the message from
    /// the code.
    pub fn localize(&self, code: u32, headers: HeaderMap) -> Reply {
        self.ok("", code, headers)
    }

    // -----------------------------------------------------------------------
    // Failure aliases
    // -----------------------------------------------------------------------

    pub fn error_bad_request(&self, message: &str) -> Reply {
        self.fail_with(message, ResponseCode::BadRequest)
    }

    pub fn error_unauthorized(&self, message: &str) -> Reply {
        self.fail_with(message, ResponseCode::Unauthorized)
    }

    pub fn error_forbidden(&self, message: &str) -> Reply {
        self.fail_with(message, ResponseCode::Forbidden)
    }

    pub fn error_not_found(&self, message: &str) -> Reply {
        self.fail_with(message, ResponseCode::NotFound)
    }

    pub fn error_method_not_allowed(&self, message: &str) -> Reply {
        self.fail_with(message, ResponseCode::MethodNotAllowed)
    }

    pub fn error_internal(&self, message: &str) -> Reply {
        self.fail_with(message, ResponseCode::InternalServerError)
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn fail_with(&self, message: &str, code: ResponseCode) -> Reply {
        self.fail(message, code.code(), None, HeaderMap::new())
    }

    fn internal_failure(&self, err: CoreError) -> Reply {
        tracing::error!(error = %err, "Failed to build success envelope");
        self.error_internal(INTERNAL_ERROR_MESSAGE)
    }

    fn emit(&self, envelope: &Envelope, headers: HeaderMap) -> Reply {
        let status = StatusCode::from_u16(envelope.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        tracing::debug!(code = envelope.code, %status, "Emitting envelope");

        Reply::new(self.formatter.render(envelope), status, headers)
    }
}

fn with_optional_location(reply: Reply, location: Option<&str>) -> Reply {
    match location {
        Some(location) if !location.is_empty() => reply.with_location(location),
        _ => reply,
    }
}
