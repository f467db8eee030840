//! Handwriting recognition: local ink validation, a single upstream call,
//! and candidate extraction.

pub mod candidates;
mod service;

pub use candidates::extract_candidates;
pub use service::{HandwriteService, MAX_CANDIDATES};
