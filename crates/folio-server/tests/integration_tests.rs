//! Integration test suite for the Folio server.
//!
//! Runs the full router against mocked project and activity hosts.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;
mod integration;
