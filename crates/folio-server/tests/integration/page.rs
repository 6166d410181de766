//! Rendering the page from live and failed feeds.

use axum::http::StatusCode;
use serde_json::json;

use crate::common::{TestHarness, decode_slashes};

#[tokio::test]
async fn test_page_renders_fetched_project() {
    let harness = TestHarness::new().await;
    harness
        .mount_projects(json!([{
            "title": "X",
            "description": "<b>hi</b>",
            "pictureUrl": "p.png",
            "url": "https://x"
        }]))
        .await;
    harness.state.load_once().await;

    let (status, html) = harness.get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(html.matches("project-description").count(), 1);
    assert!(html.contains("<h2>X</h2>"));
    assert!(html.contains("<b>hi</b>"));
    assert!(html.contains(">Link</a>"));

    let html = decode_slashes(&html);
    assert!(html.contains(r#"<a class="project-link" href="https://x">Link</a>"#));
    assert!(html.contains(r#"src="p.png""#));
}

#[tokio::test]
async fn test_failed_feed_still_serves_page() {
    let harness = TestHarness::new().await;
    harness.mount_projects_status(404).await;
    harness.state.load_once().await;

    let (status, html) = harness.get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(!html.contains("project-description"));
    assert!(html.contains("Activity is not available"));
    assert!(html.contains("octo@example.com"));
}

#[tokio::test]
async fn test_page_before_any_fetch_has_profile_only() {
    let harness = TestHarness::new().await;

    let (status, html) = harness.get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Mathias"));
    assert!(!html.contains("project-description"));
}

#[tokio::test]
async fn test_activity_calendar_is_rendered() {
    let harness = TestHarness::new().await;
    harness.mount_projects(json!([])).await;
    harness
        .mount_activity(json!({
            "total": { "lastYear": 3 },
            "contributions": [
                { "date": "2024-03-15", "count": 3, "level": 2 },
                { "date": "2024-03-14", "count": 0, "level": 0 }
            ]
        }))
        .await;
    harness.state.load_once().await;

    let (status, html) = harness.get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("3 activities on 2024-03-15"));
    assert!(html.contains("3 activities in the last year"));
    assert!(html.contains("target=\"_blank\""));
    assert!(!html.contains("Activity is not available"));
}

#[tokio::test]
async fn test_activation_fetches_once() {
    let harness = TestHarness::new().await;
    harness
        .mount_projects(json!([{ "title": "Only" }, { "title": "Two" }]))
        .await;

    for task in harness.state.activate() {
        task.await.unwrap();
    }
    assert!(harness.state.activate().is_empty());

    let titles: Vec<_> = harness
        .state
        .projects
        .projects()
        .into_iter()
        .map(|p| p.title)
        .collect();
    assert_eq!(titles, vec!["Only", "Two"]);
}
