//! minireader - an edge proxy for Japanese dictionary and handwriting APIs.
//!
//! Browser clients talk to one stable JSON shape (the legacy Jisho
//! `{japanese, senses}` entry list) while the proxy fans out to whichever
//! upstream currently answers.
//!
//! # Architecture
//!
//! - **Dictionary lookup** runs a strictly sequential fallback chain:
//!   Jotoba word search, then kanjiapi.dev words for the leading kanji, then
//!   a single entry synthesized from kanjiapi.dev kanji detail. The first
//!   stage yielding an entry with glosses wins and is cached; when every
//!   stage fails, a stale cached result is served if one exists.
//! - **Handwriting** forwards validated ink to Google Input Tools and
//!   returns the recognizer's reply verbatim, or extracts candidate
//!   characters from it.
//!
//! # Modules
//!
//! - [`domain`] - Queries, canonical entries, cache records, ink payloads
//! - [`port`] - Traits at the upstream and cache seams
//! - [`application`] - Lookup orchestration, normalization, handwriting
//! - [`adapter`] - HTTP clients, in-memory cache, HTTP server and CLI
//! - [`infrastructure`] - Configuration and component wiring
//! - [`error`] - Error types for the crate

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
