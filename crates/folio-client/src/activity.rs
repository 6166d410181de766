//! Activity calendar data provider.
//!
//! The calendar does not compute activity itself. An [`ActivityProvider`]
//! returns one [`ActivityDay`] per date over the trailing year, with its own
//! 0–4 intensity bucket. The shipped provider reads a public contributions
//! API that answers:
//!
//! ```json
//! {"total": {"lastYear": 12}, "contributions": [{"date": "2024-03-15", "count": 3, "level": 1}]}
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use folio_core::resources::activity_url;
use folio_core::{ActivityDay, FolioConfig, OwnerResources};
use serde::Deserialize;

use crate::http::{FetchPolicy, JsonFetcher};
use crate::snapshot::{Feed, RemoteSource};
use crate::Result;

/// Supplies activity days for an owner.
#[async_trait]
pub trait ActivityProvider: Send + Sync {
    /// Days in the provider's window, sorted by date.
    async fn activity(&self, owner: &str) -> Result<Vec<ActivityDay>>;
}

/// Provider backed by the contributions API.
#[derive(Debug, Clone)]
pub struct ContributionsApi {
    base_url: String,
    fetcher: JsonFetcher,
}

#[derive(Debug, Deserialize)]
struct ContributionsResponse {
    #[serde(default)]
    contributions: Vec<ActivityDay>,
}

impl ContributionsApi {
    /// Provider rooted at `base_url` (e.g. `https://host/v4`).
    pub fn new(base_url: impl Into<String>, fetcher: JsonFetcher) -> Self {
        Self {
            base_url: base_url.into(),
            fetcher,
        }
    }

    /// Provider for the configured API host.
    pub fn from_config(config: &FolioConfig) -> Result<Self> {
        let fetcher = JsonFetcher::new(FetchPolicy::from_config(&config.feed))?;
        Ok(Self::new(config.hosts.activity_api.clone(), fetcher))
    }

}

#[async_trait]
impl ActivityProvider for ContributionsApi {
    async fn activity(&self, owner: &str) -> Result<Vec<ActivityDay>> {
        let url = activity_url(&self.base_url, owner);
        let response: ContributionsResponse = self.fetcher.get_json(&url).await?;
        let mut days = response.contributions;
        days.sort_by_key(|day| day.date);
        days.dedup_by_key(|day| day.date);
        tracing::debug!(owner = %owner, days = days.len(), "parsed activity");
        Ok(days)
    }
}

/// Activity for one owner, as a [`RemoteSource`].
#[derive(Clone)]
pub struct ActivitySource {
    owner: String,
    provider: Arc<dyn ActivityProvider>,
}

impl ActivitySource {
    /// Source for `owner` backed by `provider`.
    pub fn new(owner: impl Into<String>, provider: Arc<dyn ActivityProvider>) -> Self {
        Self {
            owner: owner.into(),
            provider,
        }
    }

    /// The owner identifier.
    pub fn owner(&self) -> &str {
        &self.owner
    }
}

#[async_trait]
impl RemoteSource for ActivitySource {
    type Output = Vec<ActivityDay>;

    fn name(&self) -> &'static str {
        "activity"
    }

    async fn fetch(&self) -> Result<Vec<ActivityDay>> {
        self.provider.activity(&self.owner).await
    }
}

/// Activity data with its latest snapshot.
pub type ActivityFeed = Feed<ActivitySource>;

impl Feed<ActivitySource> {
    /// Feed for the configured owner using the contributions API.
    pub fn from_config(config: &FolioConfig) -> Result<Self> {
        let provider = Arc::new(ContributionsApi::from_config(config)?);
        let owner = OwnerResources::from_config(config).owner().to_string();
        Ok(Self::new(ActivitySource::new(owner, provider)))
    }

    /// Days to render, or `None` while no fetch has succeeded.
    pub fn days(&self) -> Option<Vec<ActivityDay>> {
        self.state().current().cloned()
    }
}
