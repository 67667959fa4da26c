//! Transcoder job queue: submission client and response classification.

mod client;
mod response;

pub use client::*;
pub use response::*;
