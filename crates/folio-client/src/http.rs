//! Shared JSON-over-HTTP fetcher with timeout and bounded retry.

use std::time::Duration;

use backon::{ExponentialBuilder, Retryable};
use folio_core::config::FeedConfig;
use serde::de::DeserializeOwned;

use crate::{FetchError, Result};

const USER_AGENT: &str = concat!("folio/", env!("CARGO_PKG_VERSION"));

/// Timeout and retry settings for one remote source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchPolicy {
    /// Per-attempt timeout
    pub timeout: Duration,
    /// Extra attempts after the first, retryable errors only
    pub max_retries: usize,
    /// Delay before the first retry; doubles afterwards
    pub min_delay: Duration,
}

impl FetchPolicy {
    /// Policy from the `[feed]` config section.
    pub fn from_config(feed: &FeedConfig) -> Self {
        Self {
            timeout: Duration::from_secs(feed.timeout_secs),
            max_retries: feed.max_retries,
            min_delay: Duration::from_millis(feed.retry_min_delay_ms),
        }
    }

    /// One attempt, no retries.
    pub fn single_attempt(timeout: Duration) -> Self {
        Self {
            timeout,
            max_retries: 0,
            min_delay: Duration::ZERO,
        }
    }

    fn backoff(&self) -> ExponentialBuilder {
        ExponentialBuilder::default()
            .with_min_delay(self.min_delay)
            .with_max_times(self.max_retries)
    }
}

impl Default for FetchPolicy {
    fn default() -> Self {
        Self::from_config(&FeedConfig::default())
    }
}

/// GETs a URL and decodes the JSON body.
#[derive(Debug, Clone)]
pub struct JsonFetcher {
    client: reqwest::Client,
    policy: FetchPolicy,
}

impl JsonFetcher {
    /// Build a fetcher with its own connection pool.
    pub fn new(policy: FetchPolicy) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(policy.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client, policy })
    }

    /// Fetch and decode `url`, retrying transient failures.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let attempt = || async { self.get_json_once::<T>(url).await };
        attempt
            .retry(self.policy.backoff())
            .sleep(tokio::time::sleep)
            .when(FetchError::is_retryable)
            .notify(|err, delay| {
                tracing::warn!(url = %url, error = %err, delay_ms = delay.as_millis() as u64, "retrying fetch");
            })
            .await
    }

    async fn get_json_once<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!(url = %url, "GET");
        let network = |source| FetchError::Network {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(network)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await.map_err(network)?;
        serde_json::from_slice(&body).map_err(|source| FetchError::Parse {
            url: url.to_string(),
            source,
        })
    }
}
