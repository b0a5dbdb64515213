//! Handlers for the demo widget resource.
//!
//! Every responder method is reachable from here: list endpoints exercise
//! the offset, simple and cursor paginators; the rest map store outcomes to
//! created / accepted / no-content / not-found replies.

use axum::extract::State;
use axum::http::HeaderMap;
use serde::Deserialize;
use serde_json::json;

use parcel_core::page::{CursorPage, OffsetPage};
use parcel_core::payload::Payload;
use parcel_core::status::ResponseCode;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::query::{CursorParams, PageParams};
use crate::reply::Reply;
use crate::state::AppState;

/// Public path of the widget collection, used for links and `Location`.
pub const WIDGETS_PATH: &str = "/api/v1/widgets";

/// Request body for `POST /widgets`.
#[derive(Debug, Deserialize)]
pub struct CreateWidget {
    #[serde(default)]
    pub name: String,
}

/// Query parameters for `GET /widgets/localized`.
#[derive(Debug, Deserialize)]
pub struct LocalizeParams {
    pub code: Option<u32>,
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// GET /api/v1/widgets
///
/// Page-number listing with a known total.
pub async fn list_widgets(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PageParams>,
) -> AppResult<Reply> {
    let (page, per_page) = (params.page(), params.per_page());
    let (widgets, total) = state.widgets.page(page, per_page).await;

    let page = OffsetPage::length_aware(&widgets, total, per_page, page)?.with_path(WIDGETS_PATH);

    Ok(state
        .responder
        .success(page, "", ResponseCode::Ok.code(), HeaderMap::new()))
}

/// GET /api/v1/widgets/simple
///
/// Page-number listing without a total.
pub async fn list_widgets_simple(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PageParams>,
) -> AppResult<Reply> {
    let (page, per_page) = (params.page(), params.per_page());
    let (widgets, has_more) = state.widgets.simple_page(page, per_page).await;

    let page = OffsetPage::simple(&widgets, per_page, page, has_more)?
        .with_path(format!("{WIDGETS_PATH}/simple"));

    Ok(state
        .responder
        .success(page, "", ResponseCode::Ok.code(), HeaderMap::new()))
}

/// GET /api/v1/widgets/cursor
///
/// Cursor listing. The cursor is the id of the last widget already seen.
pub async fn list_widgets_cursor(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<CursorParams>,
) -> AppResult<Reply> {
    let per_page = params.per_page();
    let after = match params.cursor.as_deref() {
        None | Some("") => None,
        Some(raw) => Some(
            raw.parse::<u64>()
                .map_err(|_| AppError::BadRequest(format!("Invalid cursor: {raw}")))?,
        ),
    };

    let slice = state.widgets.after(after, per_page).await;
    let page = CursorPage::new(
        &slice.widgets,
        per_page,
        after.map(|id| id.to_string()),
        slice.next.map(|id| id.to_string()),
        slice.prev.map(|id| id.to_string()),
    )?
    .with_path(format!("{WIDGETS_PATH}/cursor"));

    Ok(state
        .responder
        .success(page, "", ResponseCode::Ok.code(), HeaderMap::new()))
}

// ---------------------------------------------------------------------------
// Single widget
// ---------------------------------------------------------------------------

/// GET /api/v1/widgets/{id}
pub async fn get_widget(State(state): State<AppState>, AppPath(id): AppPath<u64>) -> Reply {
    match state.widgets.get(id).await {
        Some(widget) => state.responder.success_serialize(
            &widget,
            "",
            ResponseCode::Ok.code(),
            HeaderMap::new(),
        ),
        None => state.responder.error_not_found("Widget not found"),
    }
}

/// POST /api/v1/widgets
///
/// Creates a widget and points `Location` at it. A blank name is rejected
/// with per-field `errors`.
pub async fn create_widget(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateWidget>,
) -> AppResult<Reply> {
    let name = input.name.trim();
    if name.is_empty() {
        return Ok(state.responder.error(&AppError::Validation {
            message: "The given data was invalid".to_string(),
            errors: json!({ "name": ["The name field is required."] }),
        }));
    }

    let widget = state.widgets.insert(name).await;
    tracing::info!(widget_id = widget.id, "Widget created");

    let location = format!("{WIDGETS_PATH}/{}", widget.id);
    Ok(state.responder.created(
        Payload::from_serialize(&widget)?,
        "Widget created",
        Some(&location),
    ))
}

/// PUT /api/v1/widgets/{id}/refresh
///
/// Accepts a refresh request for later processing.
pub async fn refresh_widget(
    State(state): State<AppState>,
    AppPath(id): AppPath<u64>,
) -> AppResult<Reply> {
    let widget = state
        .widgets
        .refresh(id)
        .await
        .ok_or_else(|| AppError::NotFound("Widget not found".to_string()))?;

    let location = format!("{WIDGETS_PATH}/{id}");
    Ok(state.responder.accepted(
        Payload::from_serialize(&widget)?,
        "Refresh scheduled",
        Some(&location),
    ))
}

/// DELETE /api/v1/widgets/{id}
pub async fn delete_widget(State(state): State<AppState>, AppPath(id): AppPath<u64>) -> Reply {
    match state.widgets.remove(id).await {
        Some(_) => {
            tracing::info!(widget_id = id, "Widget deleted");
            state.responder.no_content("")
        }
        None => state.responder.error_not_found("Widget not found"),
    }
}

// ---------------------------------------------------------------------------
// Data-less replies
// ---------------------------------------------------------------------------

/// GET /api/v1/widgets/ping
pub async fn ping(State(state): State<AppState>) -> Reply {
    state
        .responder
        .ok("pong", ResponseCode::Ok.code(), HeaderMap::new())
}

/// GET /api/v1/widgets/localized?code=
///
/// Empty-message reply; the client localizes the message from `code`.
pub async fn localized(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<LocalizeParams>,
) -> Reply {
    let code = params.code.unwrap_or(ResponseCode::Ok.code());
    state.responder.localize(code, HeaderMap::new())
}

/// Fallback for known paths hit with an unsupported method.
pub async fn method_not_allowed(State(state): State<AppState>) -> Reply {
    state
        .responder
        .error_method_not_allowed("Method not allowed")
}
