//! Shared application state.

use std::sync::Arc;
use std::time::Duration;

use folio_client::{ActivityFeed, ProjectFeed};
use folio_core::FolioConfig;
use folio_render::PageRenderer;
use tokio::task::JoinHandle;

use crate::Result;

/// Everything a request handler needs. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    /// Immutable configuration
    pub config: Arc<FolioConfig>,
    /// Page composer
    pub renderer: PageRenderer,
    /// Project feed snapshot
    pub projects: Arc<ProjectFeed>,
    /// Activity calendar snapshot
    pub activity: Arc<ActivityFeed>,
}

impl AppState {
    /// Build state from configuration. Nothing is fetched yet.
    pub fn from_config(config: FolioConfig) -> Result<Self> {
        let config = Arc::new(config);
        let renderer = PageRenderer::new(Arc::clone(&config))?;
        let projects = Arc::new(ProjectFeed::from_config(&config)?);
        let activity = Arc::new(ActivityFeed::from_config(&config)?);
        Ok(Self::new(config, renderer, projects, activity))
    }

    /// Assemble state from parts.
    pub fn new(
        config: Arc<FolioConfig>,
        renderer: PageRenderer,
        projects: Arc<ProjectFeed>,
        activity: Arc<ActivityFeed>,
    ) -> Self {
        Self {
            config,
            renderer,
            projects,
            activity,
        }
    }

    /// Kick off the initial fetches, plus periodic refresh when configured.
    ///
    /// Returns the spawned tasks. Calling this again only adds refresh tasks
    /// if the interval is set; the initial fetch happens once.
    pub fn activate(&self) -> Vec<JoinHandle<()>> {
        let mut tasks: Vec<JoinHandle<()>> = [self.projects.activate(), self.activity.activate()]
            .into_iter()
            .flatten()
            .collect();

        let secs = self.config.feed.refresh_interval_secs;
        if secs > 0 && !tasks.is_empty() {
            let period = Duration::from_secs(secs);
            tracing::info!(period_secs = secs, "periodic refresh enabled");
            tasks.push(self.projects.spawn_refresh(period));
            tasks.push(self.activity.spawn_refresh(period));
        }
        tasks
    }

    /// Fetch both sources once and wait for the outcome.
    ///
    /// Failures are recorded in the feed states; the page still renders.
    pub async fn load_once(&self) {
        let (projects, activity) = tokio::join!(self.projects.load(), self.activity.load());
        if projects.is_err() || activity.is_err() {
            tracing::warn!(
                projects = self.projects.state().label(),
                activity = self.activity.state().label(),
                "rendering with incomplete data"
            );
        }
    }

    /// Render the page from the current snapshots.
    pub fn render_html(&self) -> Result<String> {
        let projects = self.projects.projects();
        let activity = self.activity.days();
        Ok(self.renderer.render_html(&projects, activity.as_deref())?)
    }
}
