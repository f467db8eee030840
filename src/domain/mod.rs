//! Source-agnostic domain types: queries, entries, cache records and ink.

pub mod cache;
pub mod entry;
pub mod ink;
pub mod query;
pub mod source;

pub use cache::{CacheKey, CacheRecord, Route};
pub use entry::{jlpt_tag, Entry, JapaneseForm, Sense};
pub use ink::{InkPayload, InkRequest, Point, Stroke, WritingGuide, MIN_STROKE_POINTS};
pub use query::{is_cjk_string, is_kanji, Query};
pub use source::Source;
