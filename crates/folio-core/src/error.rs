//! Error types for folio-core.

use std::path::{Path, PathBuf};

/// Errors raised while loading or validating Folio configuration.
///
/// Page rendering itself has no error path in this crate: contacts and the
/// clock are total. Everything here happens once, at startup.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Configuration is missing or inconsistent
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// I/O error while reading or writing a config file
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path that was being accessed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// TOML could not be parsed into a config
    #[error("Failed to parse config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Config could not be serialized back to TOML
    #[error("Failed to serialize config: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Timezone name is not a known IANA zone
    #[error("Unknown timezone: {name}")]
    InvalidTimezone {
        /// Name that failed to parse
        name: String,
    },
}

/// Convenience `Result` type alias for folio-core operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Wraps an I/O error with the path that caused it.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
