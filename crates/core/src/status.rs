//! Status codes used by the envelope.
//!
//! The envelope `code` is a plain `u32` so callers can use either an HTTP
//! status (`404`) or a longer business code (`404002`). The HTTP status of a
//! business code is its first three digits.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Named codes
// ---------------------------------------------------------------------------

/// The fixed set of status codes the responder has semantic methods for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseCode {
    Ok,
    Created,
    Accepted,
    NoContent,
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    MethodNotAllowed,
    InternalServerError,
}

impl ResponseCode {
    /// All named codes, in ascending order.
    pub const ALL: [ResponseCode; 10] = [
        ResponseCode::Ok,
        ResponseCode::Created,
        ResponseCode::Accepted,
        ResponseCode::NoContent,
        ResponseCode::BadRequest,
        ResponseCode::Unauthorized,
        ResponseCode::Forbidden,
        ResponseCode::NotFound,
        ResponseCode::MethodNotAllowed,
        ResponseCode::InternalServerError,
    ];

    /// Numeric value placed in the envelope and used as the HTTP status.
    pub const fn code(self) -> u32 {
        match self {
            ResponseCode::Ok => 200,
            ResponseCode::Created => 201,
            ResponseCode::Accepted => 202,
            ResponseCode::NoContent => 204,
            ResponseCode::BadRequest => 400,
            ResponseCode::Unauthorized => 401,
            ResponseCode::Forbidden => 403,
            ResponseCode::NotFound => 404,
            ResponseCode::MethodNotAllowed => 405,
            ResponseCode::InternalServerError => 500,
        }
    }

    /// Canonical reason phrase.
    pub const fn reason(self) -> &'static str {
        match self {
            ResponseCode::Ok => "OK",
            ResponseCode::Created => "Created",
            ResponseCode::Accepted => "Accepted",
            ResponseCode::NoContent => "No Content",
            ResponseCode::BadRequest => "Bad Request",
            ResponseCode::Unauthorized => "Unauthorized",
            ResponseCode::Forbidden => "Forbidden",
            ResponseCode::NotFound => "Not Found",
            ResponseCode::MethodNotAllowed => "Method Not Allowed",
            ResponseCode::InternalServerError => "Internal Server Error",
        }
    }

    /// Look up the named code for a numeric value, if there is one.
    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }
}

impl From<ResponseCode> for u32 {
    fn from(code: ResponseCode) -> Self {
        code.code()
    }
}

// ---------------------------------------------------------------------------
// HTTP status derivation
// ---------------------------------------------------------------------------

/// Status used when a code cannot be mapped to a valid HTTP status.
pub const FALLBACK_HTTP_STATUS: u16 = 500;

/// Derive the HTTP status for an envelope code.
///
/// - Three-digit codes are used as is.
/// - Longer business codes use their first three digits (`200101` -> `200`).
/// - Anything outside `200..=599` after that falls back to `500`. An
///   envelope is a final response, so 1xx is never produced.
pub fn http_status_for(code: u32) -> u16 {
    let mut status = code;
    while status >= 1000 {
        status /= 10;
    }

    if (200..=599).contains(&status) {
        status as u16
    } else {
        tracing::warn!(code, "Envelope code has no HTTP status, using 500");
        FALLBACK_HTTP_STATUS
    }
}

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// Coarse outcome of a response, rendered as the optional `status` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Fail,
    Error,
}

impl Outcome {
    /// Classify an envelope code by its HTTP status class.
    pub fn for_code(code: u32) -> Self {
        match http_status_for(code) {
            400..=499 => Outcome::Fail,
            500..=599 => Outcome::Error,
            _ => Outcome::Success,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::Fail => "fail",
            Outcome::Error => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_codes_round_trip_through_from_code() {
        for code in ResponseCode::ALL {
            assert_eq!(ResponseCode::from_code(code.code()), Some(code));
        }
        assert_eq!(ResponseCode::from_code(418), None);
    }

    #[test]
    fn plain_http_codes_map_to_themselves() {
        assert_eq!(http_status_for(200), 200);
        assert_eq!(http_status_for(404), 404);
        assert_eq!(http_status_for(503), 503);
    }

    #[test]
    fn business_codes_use_leading_three_digits() {
        assert_eq!(http_status_for(200101), 200);
        assert_eq!(http_status_for(4040), 404);
        assert_eq!(http_status_for(500_001), 500);
    }

    #[test]
    fn unmappable_codes_fall_back_to_500() {
        assert_eq!(http_status_for(0), FALLBACK_HTTP_STATUS);
        assert_eq!(http_status_for(42), FALLBACK_HTTP_STATUS);
        assert_eq!(http_status_for(999), FALLBACK_HTTP_STATUS);
        assert_eq!(http_status_for(700_123), FALLBACK_HTTP_STATUS);
    }

    #[test]
    fn informational_codes_fall_back_to_500() {
        assert_eq!(http_status_for(100), FALLBACK_HTTP_STATUS);
        assert_eq!(http_status_for(1000), FALLBACK_HTTP_STATUS);
        assert_eq!(http_status_for(101_001), FALLBACK_HTTP_STATUS);
        assert_eq!(Outcome::for_code(1999), Outcome::Error);
    }

    #[test]
    fn outcome_follows_status_class() {
        assert_eq!(Outcome::for_code(201), Outcome::Success);
        assert_eq!(Outcome::for_code(302), Outcome::Success);
        assert_eq!(Outcome::for_code(404), Outcome::Fail);
        assert_eq!(Outcome::for_code(422001), Outcome::Fail);
        assert_eq!(Outcome::for_code(500), Outcome::Error);
    }
}
