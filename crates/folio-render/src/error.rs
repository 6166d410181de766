//! Error types for folio-render

use thiserror::Error;

/// Result type alias for folio-render operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while producing the page
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from folio-core (bad timezone in config)
    #[error("Core error: {0}")]
    Core(#[from] folio_core::Error),

    /// Template rendering failed
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}
