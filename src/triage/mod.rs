//! Candidate selection and dispatch.

mod filter;
mod pipeline;
mod rank;

pub use filter::{is_candidate, TARGET_CODECS};
pub use pipeline::*;
pub use rank::rank;
