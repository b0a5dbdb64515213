#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use parcel_api::config::ServerConfig;
use parcel_api::reply::Reply;
use parcel_api::router::build_app_router;
use parcel_api::state::AppState;
use parcel_api::store::WidgetStore;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        ..ServerConfig::default()
    }
}

/// Build state around a store seeded with `widgets` widgets.
pub fn test_state(widgets: u64) -> AppState {
    let mut state = AppState::from_config(test_config()).unwrap();
    state.widgets = Arc::new(WidgetStore::seeded(widgets));
    state
}

/// Build the full application router with all middleware layers.
///
/// Goes through the same `build_app_router` as `main.rs`, so tests exercise
/// the production middleware stack.
pub fn build_test_app(widgets: u64) -> Router {
    build_app_router(test_state(widgets)).unwrap()
}

pub async fn send(app: Router, method: Method, uri: &str, body: Body) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, Body::empty()).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Body::from(json.to_string())).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Emit a `Reply` through axum and parse the resulting body.
pub async fn reply_json(reply: Reply) -> serde_json::Value {
    use axum::response::IntoResponse;
    body_json(reply.into_response()).await
}
