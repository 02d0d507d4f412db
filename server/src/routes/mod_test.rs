use super::*;
use crate::state::test_helpers::test_app_state;
use axum::body::Body;
use axum::http::{Method, Request, header};
use serde_json::{Value, json};
use tower::ServiceExt;

async fn call(app: Router, method: Method, uri: &str) -> Response {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::ORIGIN, "https://shop.example")
        .body(Body::empty())
        .unwrap();
    app.oneshot(req).await.unwrap()
}

async fn body_json(resp: Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_returns_ok() {
    let dir = tempfile::tempdir().unwrap();
    let resp = call(app(test_app_state(), dir.path()), Method::GET, "/api/health").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!({ "status": "ok" }));
}

#[tokio::test]
async fn health_post_is_405() {
    let dir = tempfile::tempdir().unwrap();
    let resp = call(app(test_app_state(), dir.path()), Method::POST, "/api/health").await;
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body_json(resp).await, json!({ "error": "Method not allowed." }));
}

#[tokio::test]
async fn chat_delete_is_405() {
    let dir = tempfile::tempdir().unwrap();
    let resp = call(app(test_app_state(), dir.path()), Method::DELETE, "/api/chat").await;
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn responses_carry_cors_header() {
    let dir = tempfile::tempdir().unwrap();
    let resp = call(app(test_app_state(), dir.path()), Method::GET, "/api/health").await;
    assert_eq!(
        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn cors_preflight_for_chat_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/chat")
        .header(header::ORIGIN, "https://shop.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();
    let resp = app(test_app_state(), dir.path())
        .oneshot(req)
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));
}

#[tokio::test]
async fn static_tenant_config_is_served() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("config")).unwrap();
    std::fs::write(dir.path().join("config/default.json"), r#"{"business_name":"Acme"}"#).unwrap();

    let resp = call(app(test_app_state(), dir.path()), Method::GET, "/config/default.json").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!({ "business_name": "Acme" }));
}

#[tokio::test]
async fn unknown_path_is_404() {
    let dir = tempfile::tempdir().unwrap();
    let resp = call(app(test_app_state(), dir.path()), Method::GET, "/nope.js").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[test]
fn api_error_into_response_sets_status() {
    let resp = ApiError::new(StatusCode::BAD_REQUEST, "nope").into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
