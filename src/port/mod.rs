//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! # Architecture
//!
//! ```text
//!                 ┌──────────────────────────┐
//!   HTTP / CLI ──▶│       Application        │
//!                 │  LookupService           │
//!                 │  HandwriteService        │
//!                 └──────────────────────────┘
//!                    │          │          │
//!                    ▼          ▼          ▼
//!           ┌────────────┐ ┌──────────┐ ┌────────────┐
//!           │ Dictionary │ │  Cache   │ │Handwriting │
//!           │  Sources   │ │  Store   │ │ Recognizer │
//!           └────────────┘ └──────────┘ └────────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`outbound::dictionary::DictionarySource`] - Word search and kanji lookups
//! - [`outbound::handwriting::HandwritingRecognizer`] - Ink recognition
//! - [`outbound::cache::CacheStore`] - Keyed store for normalized results

pub mod outbound;
