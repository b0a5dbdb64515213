//! Route definitions for the demo widget resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::widgets;
use crate::state::AppState;

/// Widget routes mounted at `/widgets`.
///
/// ```text
/// GET    /                  -> list_widgets
/// POST   /                  -> create_widget
/// GET    /simple            -> list_widgets_simple
/// GET    /cursor            -> list_widgets_cursor
/// GET    /ping              -> ping
/// GET    /localized         -> localized
/// GET    /{id}              -> get_widget
/// DELETE /{id}              -> delete_widget
/// PUT    /{id}/refresh      -> refresh_widget
/// ```
///
/// Any other method on these paths gets a 405 envelope.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(widgets::list_widgets).post(widgets::create_widget))
        .route("/simple", get(widgets::list_widgets_simple))
        .route("/cursor", get(widgets::list_widgets_cursor))
        .route("/ping", get(widgets::ping))
        .route("/localized", get(widgets::localized))
        .route("/{id}", get(widgets::get_widget).delete(widgets::delete_widget))
        .route("/{id}/refresh", put(widgets::refresh_widget))
        .method_not_allowed_fallback(widgets::method_not_allowed)
}
