//! HTTP routes.
//!
//! | Route           | Response                                   |
//! |-----------------|--------------------------------------------|
//! | `GET /`         | rendered page (`text/html`)                |
//! | `GET /health`   | liveness plus feed states (JSON)           |
//! | `GET /api/projects` | current project snapshot (JSON)        |
//!
//! Every other path is a plain-text 404.

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use folio_core::Project;
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::{AppState, Result};

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/projects", get(projects))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index(State(state): State<AppState>) -> Result<Html<String>> {
    state.render_html().map(Html)
}

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process serves requests
    pub status: &'static str,
    /// Crate version
    pub version: &'static str,
    /// Project feed summary
    pub projects: FeedHealth,
    /// Activity feed summary
    pub activity: FeedHealth,
}

/// State of one remote source.
#[derive(Debug, Serialize)]
pub struct FeedHealth {
    /// `loading`, `ready` or `failed`
    pub state: &'static str,
    /// Number of items in the current snapshot
    pub items: usize,
    /// Last fetch error, if the latest fetch failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> From<&folio_client::FeedState<Vec<T>>> for FeedHealth {
    fn from(state: &folio_client::FeedState<Vec<T>>) -> Self {
        let error = match state {
            folio_client::FeedState::Failed { error, .. } => Some(error.clone()),
            _ => None,
        };
        Self {
            state: state.label(),
            items: state.current().map_or(0, Vec::len),
            error,
        }
    }
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        projects: FeedHealth::from(&state.projects.state()),
        activity: FeedHealth::from(&state.activity.state()),
    })
}

async fn projects(State(state): State<AppState>) -> Json<Vec<Project>> {
    Json(state.projects.projects())
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not found")
}
