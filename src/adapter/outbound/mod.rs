//! Outbound adapters (driven side).
//!
//! - [`jotoba`] - Primary word search
//! - [`kanjiapi`] - Kanji-indexed words and kanji detail
//! - [`google_handwriting`] - Ink recognition
//! - [`cache`] - In-process result cache

pub mod cache;
pub mod google_handwriting;
pub mod http;
pub mod jotoba;
pub mod kanjiapi;
