//! Integration tests for the Kotoba REST API
//!
//! Exercises the router end to end: routing, CORS, request logging,
//! query validation, search and error bodies.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use kotoba::core::services::Services;
use kotoba::core::types::HealthResponse;
use kotoba::http::{self, SearchResultBody};
use serde_json::{json, Value};
use tower::ServiceExt as TowerServiceExt;

use crate::common::{ids, test_config, TestDictionary};

/// Create a test application over the sample dictionary
fn create_test_app() -> (Router, TestDictionary) {
    let dict = TestDictionary::sample();
    let services = Arc::new(Services::new(test_config(&dict)).unwrap());
    (http::router(services), dict)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), 1_000_000)
        .await
        .unwrap();
    (status, body.to_vec())
}

async fn search(app: Router, query: &str) -> (StatusCode, Value) {
    let (status, body) = get(app, &format!("/search?q={}", urlencoding::encode(query))).await;
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_root_liveness() {
    let (app, _dict) = create_test_app();

    let (status, body) = get(app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body.is_empty());
}

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _dict) = create_test_app();

    let (status, body) = get(app, "/health").await;
    assert_eq!(status, StatusCode::OK);

    let health: HealthResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(health.status, "ok");
    assert!(!health.version.is_empty());
    assert_eq!(health.entries, 9);
}

#[tokio::test]
async fn test_search_missing_parameter() {
    let (app, _dict) = create_test_app();

    let (status, body) = get(app, "/search").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body, json!({ "error": "Missing query parameter: q" }));
}

#[tokio::test]
async fn test_search_empty_and_blank_parameter() {
    let (app, _dict) = create_test_app();

    for uri in ["/search?q=", "/search?q=%20%20"] {
        let (status, body) = get(app.clone(), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "uri: {uri}");
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["error"], "Missing query parameter: q");
    }
}

#[tokio::test]
async fn test_search_kanji() {
    let (app, _dict) = create_test_app();

    let (status, body) = search(app, "食べ").await;
    assert_eq!(status, StatusCode::OK);

    let results: Vec<SearchResultBody> = serde_json::from_value(body).unwrap();
    let result_ids: Vec<i64> = results.iter().map(|r| r.id).collect();
    assert_eq!(result_ids, vec![ids::TABERU, ids::TABEMONO, ids::TABESUGIRU]);

    assert_eq!(results[0].kanji.as_deref(), Some("食べる,喰べる"));
    assert_eq!(results[0].readings.as_deref(), Some("たべる"));
    assert_eq!(results[0].meanings.as_deref(), Some("to eat,to live on"));
}

#[tokio::test]
async fn test_search_omits_empty_fields() {
    let (app, _dict) = create_test_app();

    let (status, body) = search(app, "coffee").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{
            "id": ids::KOOHII,
            "readings": "コーヒー",
            "meanings": "coffee",
        }])
    );
}

#[tokio::test]
async fn test_search_no_results_is_empty_array() {
    let (app, _dict) = create_test_app();

    let (status, body) = search(app, "zzzz").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_search_fallback() {
    let (app, _dict) = create_test_app();

    let (status, body) = search(app, "eati").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["id"], ids::SHOKUJI);
}

#[tokio::test]
async fn test_search_store_failure() {
    let (app, _dict) = create_test_app();

    let (status, body) = search(app, "\"eat").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Database search error");
    assert!(body["details"].is_string());
}

#[tokio::test]
async fn test_search_query_too_long() {
    let dict = TestDictionary::sample();
    let mut config = test_config(&dict);
    config.search.max_query_length = 5;
    let app = http::router(Arc::new(Services::new(config).unwrap()));

    let (status, body) = search(app, "abcdefghij").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid query"));
}

#[tokio::test]
async fn test_search_caps_results() {
    let dict = TestDictionary::many(60);
    let app = http::router(Arc::new(Services::new(test_config(&dict)).unwrap()));

    let (status, body) = search(app, "to run").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 50);
}

#[tokio::test]
async fn test_cors_headers() {
    let (app, _dict) = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/search?q=water")
                .header(header::ORIGIN, "http://example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_unknown_route() {
    let (app, _dict) = create_test_app();

    let (status, _) = get(app, "/api/v1/search").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
