//! Error types for folio-server

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Result type alias for folio-server operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in folio-server
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from folio-core
    #[error("Core error: {0}")]
    Core(#[from] folio_core::Error),

    /// Error from folio-client
    #[error("Client error: {0}")]
    Client(#[from] folio_client::FetchError),

    /// Error from folio-render
    #[error("Render error: {0}")]
    Render(#[from] folio_render::Error),

    /// Socket or file I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The tracing subscriber could not be installed
    #[error("Logging setup failed: {0}")]
    Logging(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "The page could not be rendered.",
        )
            .into_response()
    }
}
