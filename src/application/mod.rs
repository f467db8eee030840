//! Application services (use cases).
//!
//! These services orchestrate domain logic and coordinate adapters
//! to implement the proxy's use cases.

pub mod handwrite;
pub mod lookup;
