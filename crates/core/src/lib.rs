//! Framework-free building blocks for JSON response envelopes.
//!
//! Holds the envelope model, status codes, pagination pages and the
//! [`formatter::Formatter`] contract. HTTP integration lives in `parcel-api`.

pub mod envelope;
pub mod error;
pub mod formatter;
pub mod options;
pub mod page;
pub mod payload;
pub mod status;
