//! # folio-client
//!
//! Remote sources for the Folio profile page.
//!
//! This crate fetches the two dynamic inputs of the page:
//! - the owner's project feed (`projects.json`)
//! - the activity calendar data from a contributions API
//!
//! Each source is wrapped in a [`Feed`] that exposes an explicit
//! [`FeedState`] (`Loading`, `Ready`, `Failed`) and keeps the last good
//! snapshot across failed fetches.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod activity;
pub mod error;
pub mod feed;
pub mod http;
pub mod snapshot;

pub use activity::{ActivityFeed, ActivityProvider, ActivitySource, ContributionsApi};
pub use error::{FetchError, Result};
pub use feed::{ProjectFeed, ProjectSource};
pub use http::{FetchPolicy, JsonFetcher};
pub use snapshot::{Feed, FeedState, RemoteSource};
