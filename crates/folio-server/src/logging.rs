//! Tracing subscriber setup for the binary.

use tracing_subscriber::EnvFilter;

use crate::{Error, Result};

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info,folio=debug";

/// Resolve the filter: `--verbose` wins, then `RUST_LOG`, then the default.
pub fn env_filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global fmt subscriber. Fails if one is already installed.
pub fn init_logging(verbose: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_target(true)
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))
}
