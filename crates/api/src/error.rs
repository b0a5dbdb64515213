use axum::response::{IntoResponse, Response};
use serde_json::Value;

use parcel_core::error::CoreError;
use parcel_core::status::ResponseCode;

use crate::responder::Responder;

/// Message sent in place of internal error details.
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for formatting errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] by rendering the standard fail envelope with
/// the default field options; use [`Responder::error`] to render through a
/// configured formatter instead.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// An error from `parcel_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A bad request with structured per-field details.
    #[error("Validation failed: {message}")]
    Validation { message: String, errors: Value },

    /// A missing resource.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Envelope code, message and `errors` payload for this error.
    ///
    /// Internal errors are logged here and their details replaced by
    /// [`INTERNAL_ERROR_MESSAGE`].
    pub fn envelope_parts(&self) -> (u32, String, Option<Value>) {
        match self {
            // --- CoreError variants ---
            AppError::Core(CoreError::InvalidArgument(msg)) => {
                (ResponseCode::BadRequest.code(), msg.clone(), None)
            }
            AppError::Core(err @ CoreError::Serialization(_)) => {
                tracing::error!(error = %err, "Serialization error");
                internal()
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (ResponseCode::BadRequest.code(), msg.clone(), None),
            AppError::Validation { message, errors } => (
                ResponseCode::BadRequest.code(),
                message.clone(),
                Some(errors.clone()),
            ),
            AppError::NotFound(msg) => (ResponseCode::NotFound.code(), msg.clone(), None),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        Responder::default().error(&self).into_response()
    }
}

fn internal() -> (u32, String, Option<Value>) {
    (
        ResponseCode::InternalServerError.code(),
        INTERNAL_ERROR_MESSAGE.to_string(),
        None,
    )
}
