//! JSON endpoints and fallback routing.

use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::common::TestHarness;

#[tokio::test]
async fn test_health_reports_loading_before_activation() {
    let harness = TestHarness::new().await;

    let (status, body) = harness.get("/health").await;
    let body: Value = serde_json::from_str(&body).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["projects"]["state"], "loading");
    assert_eq!(body["activity"]["state"], "loading");
}

#[tokio::test]
async fn test_health_reports_failed_feed() {
    let harness = TestHarness::new().await;
    harness.mount_projects_status(500).await;
    harness.state.load_once().await;

    let (_, body) = harness.get("/health").await;
    let body: Value = serde_json::from_str(&body).unwrap();

    assert_eq!(body["projects"]["state"], "failed");
    assert_eq!(body["projects"]["items"], 0);
    assert!(body["projects"]["error"].as_str().unwrap().contains("500"));
}

#[tokio::test]
async fn test_api_projects_returns_snapshot() {
    let harness = TestHarness::new().await;
    harness
        .mount_projects(json!([{ "title": "A", "url": "https://a" }]))
        .await;
    harness.state.load_once().await;

    let (status, body) = harness.get("/api/projects").await;
    let body: Value = serde_json::from_str(&body).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["title"], "A");
    assert_eq!(body[0]["URL"], "https://a");
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let harness = TestHarness::new().await;

    let (status, body) = harness.get("/nope").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Not found");
}
