//! Integration tests for the demo widget routes.
//!
//! Requests go through the full router built by `build_app_router`.

mod common;

use axum::body::Body;
use axum::http::header::LOCATION;
use axum::http::{Method, StatusCode};
use common::{body_json, build_test_app, get, post_json, send};
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// Test: offset listing carries items and pagination metadata
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_widgets_returns_offset_page() {
    let app = build_test_app(7);
    let response = get(app, "/api/v1/widgets?page=2&per_page=3").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];

    assert_eq!(json["code"], 200);
    assert_eq!(json["errors"], Value::Null);
    let ids: Vec<u64> = data["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![4, 5, 6]);
    assert_eq!(data["current_page"], 2);
    assert_eq!(data["per_page"], 3);
    assert_eq!(data["total"], 7);
    assert_eq!(data["last_page"], 3);
    assert_eq!(data["links"]["next"], "/api/v1/widgets?page=3");
    assert_eq!(data["links"]["prev"], "/api/v1/widgets?page=1");
}

#[tokio::test]
async fn list_widgets_clamps_per_page() {
    let app = build_test_app(3);
    let json = body_json(get(app, "/api/v1/widgets?per_page=0").await).await;

    assert_eq!(json["data"]["per_page"], 1);
    assert_eq!(json["data"]["items"].as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Test: simple listing has no total
// ---------------------------------------------------------------------------

#[tokio::test]
async fn simple_listing_omits_total() {
    let app = build_test_app(5);
    let json = body_json(get(app, "/api/v1/widgets/simple?per_page=2").await).await;
    let data = json["data"].as_object().unwrap();

    assert!(!data.contains_key("total"));
    assert!(!data.contains_key("last_page"));
    assert_eq!(data["current_page"], 1);
    assert_eq!(data["links"]["next"], "/api/v1/widgets/simple?page=2");
}

// ---------------------------------------------------------------------------
// Test: cursor listing walks forward and omits total
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cursor_listing_walks_forward() {
    let app = build_test_app(5);

    let first = body_json(get(app.clone(), "/api/v1/widgets/cursor?per_page=2").await).await;
    let data = first["data"].as_object().unwrap();
    assert!(!data.contains_key("total"));
    assert_eq!(data["next_cursor"], "2");
    assert_eq!(data["prev_cursor"], Value::Null);
    assert_eq!(data["links"]["next"], "/api/v1/widgets/cursor?cursor=2");

    let second = body_json(get(app, "/api/v1/widgets/cursor?per_page=2&cursor=2").await).await;
    assert_eq!(second["data"]["items"][0]["id"], 3);
    assert_eq!(second["data"]["current_cursor"], "2");
    assert_eq!(second["data"]["prev_cursor"], "0");
}

#[tokio::test]
async fn cursor_listing_rejects_garbage_cursor() {
    let app = build_test_app(5);
    let response = get(app, "/api/v1/widgets/cursor?cursor=abc").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["data"], Value::Null);
    assert_eq!(json["message"], "Invalid cursor: abc");
}

// ---------------------------------------------------------------------------
// Test: single widget lookup
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_widget_wraps_object_in_array() {
    let app = build_test_app(2);
    let json = body_json(get(app, "/api/v1/widgets/2").await).await;

    assert_eq!(json["data"], json!([{"id": 2, "name": "widget-2", "revision": 0}]));
}

#[tokio::test]
async fn get_missing_widget_returns_404_envelope() {
    let app = build_test_app(2);
    let response = get(app, "/api/v1/widgets/99").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], 404);
    assert_eq!(json["message"], "Widget not found");
    assert_eq!(json["data"], Value::Null);
}

// ---------------------------------------------------------------------------
// Test: extractor rejections use the fail envelope
// ---------------------------------------------------------------------------

#[tokio::test]
async fn non_numeric_id_returns_400_envelope() {
    let app = build_test_app(2);
    let response = get(app, "/api/v1/widgets/abc").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], 400);
    assert_eq!(json["data"], Value::Null);
    assert!(json["message"].as_str().unwrap().contains("parse"));
}

#[tokio::test]
async fn malformed_json_body_returns_400_envelope() {
    let app = build_test_app(0);
    let body = Body::from("{\"name\": ");
    let response = send(app, Method::POST, "/api/v1/widgets", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], 400);
    assert_eq!(json["data"], Value::Null);
    assert_eq!(json["errors"], Value::Null);
    assert!(!json["message"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn invalid_query_returns_400_envelope() {
    let app = build_test_app(2);
    let response = get(app, "/api/v1/widgets?page=first").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], 400);
    assert_eq!(json["data"], Value::Null);
}

// ---------------------------------------------------------------------------
// Test: create / refresh / delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_widget_returns_201_with_location() {
    let app = build_test_app(2);
    let response = post_json(app, "/api/v1/widgets", json!({"name": "sprocket"})).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.headers()[LOCATION], "/api/v1/widgets/3");

    let json = body_json(response).await;
    assert_eq!(json["message"], "Widget created");
    assert_eq!(json["data"][0]["name"], "sprocket");
}

#[tokio::test]
async fn create_widget_with_blank_name_returns_errors() {
    let app = build_test_app(0);
    let response = post_json(app, "/api/v1/widgets", json!({"name": "  "})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["data"], Value::Null);
    assert_eq!(json["errors"]["name"][0], "The name field is required.");
}

#[tokio::test]
async fn refresh_widget_returns_202() {
    let app = build_test_app(1);
    let response = send(app, Method::PUT, "/api/v1/widgets/1/refresh", Body::empty()).await;

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    assert_eq!(response.headers()[LOCATION], "/api/v1/widgets/1");
    let json = body_json(response).await;
    assert_eq!(json["data"][0]["revision"], 1);
}

#[tokio::test]
async fn refresh_missing_widget_returns_404() {
    let app = build_test_app(1);
    let response = send(app, Method::PUT, "/api/v1/widgets/5/refresh", Body::empty()).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "Widget not found");
}

#[tokio::test]
async fn delete_widget_returns_204_then_404() {
    let app = build_test_app(1);

    let response = send(app.clone(), Method::DELETE, "/api/v1/widgets/1", Body::empty()).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = send(app, Method::DELETE, "/api/v1/widgets/1", Body::empty()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: data-less replies
// ---------------------------------------------------------------------------

#[tokio::test]
async fn ping_returns_ok_with_empty_data() {
    let app = build_test_app(0);
    let json = body_json(get(app, "/api/v1/widgets/ping").await).await;

    assert_eq!(json, json!({"code": 200, "message": "pong", "data": [], "errors": null}));
}

#[tokio::test]
async fn localized_business_code_maps_to_http_200() {
    let app = build_test_app(0);
    let response = get(app, "/api/v1/widgets/localized?code=200101").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["code"], 200101);
    assert_eq!(json["message"], "");
}

// ---------------------------------------------------------------------------
// Test: fallbacks
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unsupported_method_returns_405_envelope() {
    let app = build_test_app(1);
    let response = send(app, Method::PATCH, "/api/v1/widgets/1", Body::empty()).await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let json = body_json(response).await;
    assert_eq!(json["code"], 405);
    assert_eq!(json["data"], Value::Null);
}

#[tokio::test]
async fn unknown_route_returns_404_envelope() {
    let app = build_test_app(0);
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], 404);
    assert_eq!(json["message"], "Route not found");
}
