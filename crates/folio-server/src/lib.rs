//! # folio-server
//!
//! HTTP surface and command-line entry point for the Folio profile page.
//!
//! The server owns one [`AppState`]: the immutable configuration, a
//! [`PageRenderer`](folio_render::PageRenderer) and the two remote feeds.
//! Feeds are activated once at startup; every request renders from the
//! snapshots available at that moment and never waits for a fetch.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config_handlers;
pub mod error;
pub mod logging;
pub mod state;

pub use app::router;
pub use error::{Error, Result};
pub use state::AppState;
