//! In-process HTTP tests against the in-memory content store.

use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;
use tower_http::cors::CorsLayer;

use server::routes;
use server::ServerState;

fn app() -> Router {
    let state = ServerState::in_memory(Duration::from_secs(2));
    routes::build_router(state, CorsLayer::very_permissive(), None)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            req = req.header(header::CONTENT_TYPE, "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };
    let resp = app.clone().oneshot(req.body(body).unwrap()).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
    (status, value)
}

#[tokio::test]
async fn health_is_ok() {
    let (status, body) = send(&app(), Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn upsert_twice_keeps_one_entry() {
    let app = app();
    let (s1, first) = send(&app, Method::POST, "/admin/content", Some(json!({"section": "hero", "key": "title", "value": "Trade Smarter"}))).await;
    assert_eq!(s1, StatusCode::CREATED);
    let (s2, second) = send(&app, Method::POST, "/admin/content", Some(json!({"section": "hero", "key": "title", "value": "Trade Faster"}))).await;
    assert_eq!(s2, StatusCode::CREATED);

    assert_eq!(first["id"], second["id"]);
    assert_eq!(first["createdAt"], second["createdAt"]);
    assert_eq!(second["value"], "Trade Faster");

    let (_, all) = send(&app, Method::GET, "/content", None).await;
    assert_eq!(all.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn section_listing_is_ordered_by_key() {
    let app = app();
    for (key, value) in [("title", "Why Choose TradePro?"), ("feature_1_title", "Lightning Fast Execution")] {
        send(&app, Method::POST, "/admin/content", Some(json!({"section": "features", "key": key, "value": value}))).await;
    }
    send(&app, Method::POST, "/admin/content", Some(json!({"section": "hero", "key": "title", "value": "x"}))).await;

    let (status, body) = send(&app, Method::GET, "/content/features", None).await;
    assert_eq!(status, StatusCode::OK);
    let keys: Vec<_> = body.as_array().unwrap().iter().map(|e| e["key"].as_str().unwrap().to_string()).collect();
    assert_eq!(keys, vec!["feature_1_title", "title"]);

    let (status, body) = send(&app, Method::GET, "/content/cta", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn single_entry_lookup() {
    let app = app();
    send(&app, Method::POST, "/admin/content", Some(json!({"section": "about", "key": "title", "value": "About Us"}))).await;

    let (status, body) = send(&app, Method::GET, "/content/about/title", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["value"], "About Us");

    let (status, body) = send(&app, Method::GET, "/content/about/image", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not Found");
}

#[tokio::test]
async fn invalid_input_is_rejected() {
    let app = app();
    let (status, body) = send(&app, Method::POST, "/admin/content", Some(json!({"section": "hero", "key": "title", "value": ""}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation Error");

    let (status, _) = send(&app, Method::POST, "/admin/content", Some(json!({"section": "hero"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::PUT, "/admin/content/not-a-uuid", Some(json!({"section": "a", "key": "b", "value": "c"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, all) = send(&app, Method::GET, "/content", None).await;
    assert_eq!(all, json!([]));
}

#[tokio::test]
async fn update_by_id_and_unknown_id() {
    let app = app();
    let (_, created) = send(&app, Method::POST, "/admin/content", Some(json!({"section": "hero", "key": "subtitle", "value": "Old"}))).await;
    let id = created["id"].as_str().unwrap();

    let (status, updated) = send(&app, Method::PUT, &format!("/admin/content/{id}"), Some(json!({"section": "hero", "key": "subtitle", "value": "New"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["value"], "New");
    assert_eq!(updated["id"], created["id"]);

    let missing = uuid::Uuid::new_v4();
    let (status, _) = send(&app, Method::PUT, &format!("/admin/content/{missing}"), Some(json!({"section": "hero", "key": "x", "value": "y"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_is_always_no_content() {
    let app = app();
    let (_, created) = send(&app, Method::POST, "/admin/content", Some(json!({"section": "hero", "key": "title", "value": "T"}))).await;
    let uri = format!("/admin/content/{}", created["id"].as_str().unwrap());

    let (s1, _) = send(&app, Method::DELETE, &uri, None).await;
    let (s2, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(s1, StatusCode::NO_CONTENT);
    assert_eq!(s2, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, Method::GET, "/content/hero/title", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn landing_falls_back_to_defaults() {
    let app = app();
    send(&app, Method::POST, "/admin/content", Some(json!({"section": "hero", "key": "title", "value": "Trade Smarter"}))).await;

    let (status, page) = send(&app, Method::GET, "/landing", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["hero"]["title"], "Trade Smarter");
    assert_eq!(page["hero"]["buttonPrimary"], "Start Trading Free");
    assert_eq!(page["features"]["items"][0]["title"], "Lightning Fast Execution");
    assert_eq!(page["stocks"], json!([]));
}

#[tokio::test]
async fn domain_endpoints_need_a_database() {
    let (status, body) = send(&app(), Method::GET, "/stocks", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "Service Unavailable");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let (status, doc) = send(&app(), Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/content/{section}"].is_object());
}
