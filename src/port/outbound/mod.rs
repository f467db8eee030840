//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe infrastructure dependencies: upstream
//! dictionary services, the handwriting recognizer and the result cache.

pub mod cache;
pub mod dictionary;
pub mod handwriting;
