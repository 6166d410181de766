//! # folio-render
//!
//! Composes the Folio profile page.
//!
//! [`PageRenderer`] combines the static configuration (metadata, contacts,
//! clock) with the current project and activity snapshots into a
//! [`Document`], which renders to HTML through an askama template. Project
//! descriptions are the only values emitted unescaped.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod document;
pub mod error;
pub mod page;

pub use document::{ContactLink, Document, DocumentMeta, ImageSide, ProfileView, ProjectBlock};
pub use error::{Error, Result};
pub use page::PageRenderer;
