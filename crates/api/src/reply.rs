//! The outgoing HTTP response built by the responder.

use axum::http::header::LOCATION;
use axum::http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;

/// A rendered envelope plus the status and headers it is sent with.
///
/// Implements [`IntoResponse`], so handlers can return it directly.
#[derive(Debug, Clone)]
pub struct Reply {
    status: StatusCode,
    headers: HeaderMap,
    body: Value,
}

impl Reply {
    pub fn new(body: Value, status: StatusCode, headers: HeaderMap) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Add (or replace) a header.
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Set the `Location` header.
    ///
    /// A location that is not a valid header value is dropped with a warning;
    /// the reply itself is still sent.
    pub fn with_location(self, location: &str) -> Self {
        match HeaderValue::from_str(location) {
            Ok(value) => self.with_header(LOCATION, value),
            Err(err) => {
                tracing::warn!(error = %err, location, "Dropping invalid Location header");
                self
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    pub fn into_body(self) -> Value {
        self.body
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        (self.status, self.headers, Json(self.body)).into_response()
    }
}
