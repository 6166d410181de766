//! Explicit loading state for remote sources.
//!
//! A [`Feed`] owns one [`RemoteSource`] and the latest [`FeedState`] it
//! produced. The state lives in a `watch` channel: a completed fetch replaces
//! the whole value in one step, and readers always clone the most recent
//! value without waiting on an in-flight request.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{Mutex, watch};
use tokio::task::JoinHandle;

use crate::Result;

/// Loading state of a remote source.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedState<T> {
    /// No fetch has completed yet
    Loading,
    /// The last fetch succeeded
    Ready(T),
    /// The last fetch failed; `last_good` is the previous success, if any
    Failed {
        /// Human-readable error, for diagnostics only
        error: String,
        /// Data from the most recent successful fetch
        last_good: Option<T>,
    },
}

impl<T> FeedState<T> {
    /// The data to display: the latest success, stale or not.
    pub fn current(&self) -> Option<&T> {
        match self {
            FeedState::Loading => None,
            FeedState::Ready(value) => Some(value),
            FeedState::Failed { last_good, .. } => last_good.as_ref(),
        }
    }

    /// Returns `true` before the first fetch has completed.
    pub fn is_loading(&self) -> bool {
        matches!(self, FeedState::Loading)
    }

    /// Returns `true` if the last fetch succeeded.
    pub fn is_ready(&self) -> bool {
        matches!(self, FeedState::Ready(_))
    }

    /// Returns `true` if the last fetch failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, FeedState::Failed { .. })
    }

    /// `loading`, `ready` or `failed`.
    pub fn label(&self) -> &'static str {
        match self {
            FeedState::Loading => "loading",
            FeedState::Ready(_) => "ready",
            FeedState::Failed { .. } => "failed",
        }
    }

    fn into_current(self) -> Option<T> {
        match self {
            FeedState::Loading => None,
            FeedState::Ready(value) => Some(value),
            FeedState::Failed { last_good, .. } => last_good,
        }
    }
}

/// Something that can be fetched into a snapshot.
#[async_trait]
pub trait RemoteSource: Send + Sync + 'static {
    /// Decoded payload
    type Output: Clone + Send + Sync + 'static;

    /// Name used in logs.
    fn name(&self) -> &'static str;

    /// Perform one (possibly retried) fetch.
    async fn fetch(&self) -> Result<Self::Output>;
}

/// A remote source plus its latest snapshot.
pub struct Feed<S: RemoteSource> {
    source: S,
    state: watch::Sender<FeedState<S::Output>>,
    fetch_lock: Mutex<()>,
    activated: AtomicBool,
}

impl<S: RemoteSource> Feed<S> {
    /// Wrap a source. The snapshot starts as [`FeedState::Loading`].
    pub fn new(source: S) -> Self {
        let (state, _) = watch::channel(FeedState::Loading);
        Self {
            source,
            state,
            fetch_lock: Mutex::new(()),
            activated: AtomicBool::new(false),
        }
    }

    /// The wrapped source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Clone of the current state.
    pub fn state(&self) -> FeedState<S::Output> {
        self.state.borrow().clone()
    }

    /// Receiver notified after every completed fetch.
    pub fn subscribe(&self) -> watch::Receiver<FeedState<S::Output>> {
        self.state.subscribe()
    }

    /// Fetch now and publish the outcome.
    ///
    /// Calls are serialized, so at most one request is in flight. On success
    /// the snapshot is replaced; on failure the previous data is kept, the
    /// state becomes `Failed` and the error is logged and returned.
    pub async fn load(&self) -> Result<S::Output> {
        let _guard = self.fetch_lock.lock().await;
        let name = self.source.name();

        match self.source.fetch().await {
            Ok(value) => {
                tracing::info!(source = name, "fetch succeeded");
                self.state.send_replace(FeedState::Ready(value.clone()));
                Ok(value)
            }
            Err(err) => {
                tracing::warn!(source = name, kind = err.kind(), error = %err, "fetch failed, keeping previous snapshot");
                let error = err.to_string();
                self.state.send_modify(|state| {
                    let previous = std::mem::replace(state, FeedState::Loading);
                    *state = FeedState::Failed {
                        error,
                        last_good: previous.into_current(),
                    };
                });
                Err(err)
            }
        }
    }
}

impl<S: RemoteSource> Feed<S> {
    /// Start the initial fetch in the background.
    ///
    /// Only the first call spawns anything; later calls return `None`.
    pub fn activate(self: &Arc<Self>) -> Option<JoinHandle<()>> {
        if self.activated.swap(true, Ordering::SeqCst) {
            return None;
        }
        let feed = Arc::clone(self);
        Some(tokio::spawn(async move {
            // Failures are already logged and recorded in the state.
            let _ = feed.load().await;
        }))
    }

    /// Re-fetch every `period`, starting one period from now.
    pub fn spawn_refresh(self: &Arc<Self>, period: Duration) -> JoinHandle<()> {
        let feed = Arc::clone(self);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                tracing::debug!(source = feed.source.name(), "periodic refresh");
                let _ = feed.load().await;
            }
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::FetchError;
    use std::collections::VecDeque;
    use std::sync::Mutex as StdMutex;
    use std::sync::atomic::AtomicUsize;

    /// Replays scripted outcomes, one per fetch.
    struct Scripted {
        outcomes: StdMutex<VecDeque<Option<Vec<u32>>>>,
        calls: AtomicUsize,
    }

    impl Scripted {
        fn new(outcomes: Vec<Option<Vec<u32>>>) -> Self {
            Self {
                outcomes: StdMutex::new(outcomes.into()),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl RemoteSource for Scripted {
        type Output = Vec<u32>;

        fn name(&self) -> &'static str {
            "scripted"
        }

        async fn fetch(&self) -> Result<Vec<u32>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.outcomes.lock().unwrap().pop_front().flatten() {
                Some(value) => Ok(value),
                None => Err(FetchError::HttpStatus {
                    status: 500,
                    url: "scripted".to_string(),
                }),
            }
        }
    }

    #[test]
    fn test_state_accessors() {
        let loading: FeedState<u8> = FeedState::Loading;
        assert!(loading.is_loading());
        assert_eq!(loading.current(), None);

        let ready = FeedState::Ready(1u8);
        assert!(ready.is_ready());
        assert_eq!(ready.current(), Some(&1));
        assert_eq!(ready.label(), "ready");

        let failed = FeedState::Failed {
            error: "boom".to_string(),
            last_good: Some(2u8),
        };
        assert!(failed.is_failed());
        assert_eq!(failed.current(), Some(&2));
    }

    #[tokio::test]
    async fn test_starts_loading() {
        let feed = Feed::new(Scripted::new(vec![]));
        assert!(feed.state().is_loading());
    }

    #[tokio::test]
    async fn test_success_replaces_snapshot() {
        let feed = Feed::new(Scripted::new(vec![Some(vec![1, 2]), Some(vec![3])]));
        feed.load().await.unwrap();
        assert_eq!(feed.state(), FeedState::Ready(vec![1, 2]));

        feed.load().await.unwrap();
        assert_eq!(feed.state(), FeedState::Ready(vec![3]));
    }

    #[tokio::test]
    async fn test_failure_before_success_leaves_no_data() {
        let feed = Feed::new(Scripted::new(vec![None]));
        assert!(feed.load().await.is_err());

        let state = feed.state();
        assert!(state.is_failed());
        assert_eq!(state.current(), None);
    }

    #[tokio::test]
    async fn test_failure_keeps_last_good() {
        let feed = Feed::new(Scripted::new(vec![Some(vec![7]), None]));
        feed.load().await.unwrap();
        assert!(feed.load().await.is_err());

        let state = feed.state();
        assert!(state.is_failed());
        assert_eq!(state.current(), Some(&vec![7]));
    }

    #[tokio::test]
    async fn test_activate_fetches_once() {
        let feed = Arc::new(Feed::new(Scripted::new(vec![Some(vec![1]), Some(vec![2])])));
        let handle = feed.activate().unwrap();
        assert!(feed.activate().is_none());
        handle.await.unwrap();

        assert_eq!(feed.source().calls.load(Ordering::SeqCst), 1);
        assert_eq!(feed.state(), FeedState::Ready(vec![1]));
    }

    #[tokio::test]
    async fn test_subscribers_see_completed_fetch() {
        let feed = Feed::new(Scripted::new(vec![Some(vec![5])]));
        let mut rx = feed.subscribe();
        feed.load().await.unwrap();

        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), FeedState::Ready(vec![5]));
    }

    #[tokio::test(start_paused = true)]
    async fn test_periodic_refresh() {
        let feed = Arc::new(Feed::new(Scripted::new(vec![
            Some(vec![1]),
            Some(vec![2]),
            Some(vec![3]),
        ])));
        let handle = feed.spawn_refresh(Duration::from_secs(60));

        let mut rx = feed.subscribe();
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), FeedState::Ready(vec![1]));
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), FeedState::Ready(vec![2]));

        handle.abort();
    }
}
