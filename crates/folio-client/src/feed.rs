//! The owner's project feed.

use async_trait::async_trait;
use folio_core::{FolioConfig, OwnerResources, Project};

use crate::http::{FetchPolicy, JsonFetcher};
use crate::snapshot::{Feed, RemoteSource};
use crate::Result;

/// Fetches `projects.json` from the owner's repository.
#[derive(Debug, Clone)]
pub struct ProjectSource {
    url: String,
    fetcher: JsonFetcher,
}

impl ProjectSource {
    /// Source for an explicit feed URL.
    pub fn new(url: impl Into<String>, fetcher: JsonFetcher) -> Self {
        Self {
            url: url.into(),
            fetcher,
        }
    }

    /// Source for the configured owner.
    pub fn from_config(config: &FolioConfig) -> Result<Self> {
        let fetcher = JsonFetcher::new(FetchPolicy::from_config(&config.feed))?;
        Ok(Self::new(
            OwnerResources::from_config(config).feed_url(),
            fetcher,
        ))
    }

    /// The feed endpoint.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl RemoteSource for ProjectSource {
    type Output = Vec<Project>;

    fn name(&self) -> &'static str {
        "projects"
    }

    async fn fetch(&self) -> Result<Vec<Project>> {
        let projects: Vec<Project> = self.fetcher.get_json(&self.url).await?;
        tracing::debug!(url = %self.url, count = projects.len(), "parsed project feed");
        Ok(projects)
    }
}

/// Project feed with its latest snapshot.
pub type ProjectFeed = Feed<ProjectSource>;

impl Feed<ProjectSource> {
    /// Feed for the configured owner.
    pub fn from_config(config: &FolioConfig) -> Result<Self> {
        Ok(Self::new(ProjectSource::from_config(config)?))
    }

    /// Projects to render: the latest successful fetch, or empty.
    pub fn projects(&self) -> Vec<Project> {
        self.state().current().cloned().unwrap_or_default()
    }
}
