//! Parcel API library.
//!
//! Axum integration for `parcel-core` envelopes: the [`responder::Responder`]
//! convenience layer, the [`reply::Reply`] response type, handler errors and
//! a demo service. Exposed as a library so integration tests and the binary
//! entrypoint share the same building blocks.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod query;
pub mod reply;
pub mod responder;
pub mod router;
pub mod routes;
pub mod state;
pub mod store;
