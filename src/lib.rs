//! Recodarr - Queue the largest not-yet-HEVC movies for transcoding
//!
//! This library crate exposes the triage pipeline and its collaborators for
//! the `recodarr` binary and for integration testing.

pub mod arr;
pub mod config;
pub mod error;
pub mod queue;
pub mod triage;

pub use error::{Error, Result};
