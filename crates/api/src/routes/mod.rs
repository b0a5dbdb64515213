pub mod health;
pub mod widgets;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /widgets                 list (offset), create
/// /widgets/simple          list (offset, no total)
/// /widgets/cursor          list (cursor)
/// /widgets/ping            data-less ok
/// /widgets/localized       data-less, message-less ok
/// /widgets/{id}            get, delete
/// /widgets/{id}/refresh    accepted (PUT)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/widgets", widgets::router())
}
