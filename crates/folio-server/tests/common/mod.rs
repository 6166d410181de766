//! Common test utilities for folio-server integration tests.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use folio_core::FolioConfig;
use folio_core::config::ContactsConfig;
use folio_server::{AppState, router};
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Owner used by every test.
pub const OWNER: &str = "octocat";

/// Mock remote hosts plus state wired to them.
pub struct TestHarness {
    /// Serves both `projects.json` and the contributions API
    pub server: MockServer,
    /// Application state pointing at `server`
    pub state: AppState,
}

impl TestHarness {
    /// Start a mock server. Nothing is mounted yet.
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let state = AppState::from_config(config_for(&server)).unwrap();
        Self { server, state }
    }

    /// Serve `body` as the project feed.
    pub async fn mount_projects(&self, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path(format!("/{OWNER}/{OWNER}/main/projects.json")))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Answer the project feed with `status`.
    pub async fn mount_projects_status(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path(format!("/{OWNER}/{OWNER}/main/projects.json")))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    /// Serve `body` as the contributions API response.
    pub async fn mount_activity(&self, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path(format!("/v4/{OWNER}")))
            .and(query_param("y", "last"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Issue a GET through the router.
    pub async fn get(&self, uri: &str) -> (StatusCode, String) {
        get(self.state.clone(), uri).await
    }
}

/// Configuration pointing every remote host at `server`, without retries.
pub fn config_for(server: &MockServer) -> FolioConfig {
    let mut config = FolioConfig {
        owner: OWNER.to_string(),
        contacts: ContactsConfig {
            identity: OWNER.to_string(),
            email: "octo@example.com".to_string(),
        },
        ..FolioConfig::default()
    };
    config.hosts.raw = server.uri();
    config.hosts.activity_api = format!("{}/v4", server.uri());
    config.feed.max_retries = 0;
    config.feed.timeout_secs = 2;
    config
}

/// Issue a GET against a fresh router and collect the body as text.
pub async fn get(state: AppState, uri: &str) -> (StatusCode, String) {
    let response = router(state)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// Undo the escaping askama applies to `/` inside attribute values.
pub fn decode_slashes(html: &str) -> String {
    html.replace("&#x2f;", "/").replace("&#x2F;", "/")
}
