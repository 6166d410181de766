#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Folio Core
//!
//! Shared types for the profile page: configuration, the contact directory,
//! the local clock, and the records carried in from remote sources. This
//! crate does no I/O beyond reading its own config file.

pub mod clock;
pub mod config;
pub mod contacts;
pub mod error;
pub mod model;
pub mod resources;

// Re-exports for convenience
pub use clock::{ClockSnapshot, FixedTimeSource, LocalClock, SystemTimeSource, TimeSource};
pub use config::FolioConfig;
pub use contacts::{ContactDirectory, ContactEntry, ContactKind};
pub use error::{Error, Result};
pub use model::{ActivityDay, Project, TrustedMarkup};
pub use resources::OwnerResources;
