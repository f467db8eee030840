//! Dictionary lookup: the fallback chain over upstream sources.
//!
//! # Modules
//!
//! - [`normalize`]: Pure raw-response → [`Entry`](crate::domain::Entry) transforms
//! - `service`: The [`LookupService`] orchestrator and its outcome types

pub mod normalize;
mod service;

pub use normalize::NormalizeLimits;
pub use service::{LookupOutcome, LookupService, LookupSettings, Provenance};
