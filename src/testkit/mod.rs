//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`source`] - Scripted [`DictionarySource`](crate::port::outbound::dictionary::DictionarySource)
//!   with call counting and optional latency.
//! - [`recognizer`] - Scripted [`HandwritingRecognizer`](crate::port::outbound::handwriting::HandwritingRecognizer).
//! - [`fixtures`] - Raw upstream response builders and ink request bodies.

pub mod fixtures;
pub mod recognizer;
pub mod source;
