use std::sync::Arc;

use parcel_core::error::CoreError;
use parcel_core::formatter::DefaultFormatter;

use crate::config::ServerConfig;
use crate::responder::Responder;
use crate::store::WidgetStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Envelope responder, built once from the configured formatter.
    pub responder: Responder,
    /// Demo widget store.
    pub widgets: Arc<WidgetStore>,
}

/// Number of widgets the demo store starts with.
pub const SEED_WIDGETS: u64 = 25;

impl AppState {
    /// Build state from configuration: a formatter honouring the configured
    /// field options, and a seeded widget store.
    pub fn from_config(config: ServerConfig) -> Result<Self, CoreError> {
        let formatter = DefaultFormatter::new(config.format.clone())?;

        Ok(Self {
            config: Arc::new(config),
            responder: Responder::new(Arc::new(formatter)),
            widgets: Arc::new(WidgetStore::seeded(SEED_WIDGETS)),
        })
    }
}
