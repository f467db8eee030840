//! Pure transforms from raw upstream responses to canonical [`Entry`] lists.
//!
//! Each source nests its data differently; every normalizer produces the
//! same legacy entry shape. Filtering entries without glosses is left to
//! the caller so normalizers can be tested on their raw output.

mod jotoba;
mod kanji_detail;
mod kanji_words;
mod pos;

use serde::de::DeserializeOwned;
use serde_json::Value;

pub use pos::flatten_parts_of_speech;

use crate::domain::{Entry, Query, Source};
use crate::error::NormalizeError;

/// Caps applied to the kanji-indexed word list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeLimits {
    pub max_kanji_words: usize,
    pub max_meanings_per_word: usize,
}

impl NormalizeLimits {
    pub const DEFAULT_MAX_KANJI_WORDS: usize = 8;
    pub const DEFAULT_MAX_MEANINGS_PER_WORD: usize = 4;
}

impl Default for NormalizeLimits {
    fn default() -> Self {
        Self {
            max_kanji_words: Self::DEFAULT_MAX_KANJI_WORDS,
            max_meanings_per_word: Self::DEFAULT_MAX_MEANINGS_PER_WORD,
        }
    }
}

/// Normalize a raw response from `source` for `query`.
///
/// # Errors
///
/// Returns [`NormalizeError`] when `raw` does not have the source's shape,
/// or when `source` does not produce dictionary entries.
pub fn normalize(
    source: Source,
    raw: &Value,
    query: &Query,
    limits: &NormalizeLimits,
) -> Result<Vec<Entry>, NormalizeError> {
    match source {
        Source::Jotoba => Ok(jotoba::normalize(decode(source, raw)?)),
        Source::KanjiWords => Ok(kanji_words::normalize(
            decode(source, raw)?,
            query.as_str(),
            limits,
        )),
        Source::KanjiDetail => Ok(kanji_detail::normalize(
            decode(source, raw)?,
            query.first_char(),
        )),
        Source::Handwriting => Err(NormalizeError::new(
            source,
            "handwriting responses carry no dictionary entries",
        )),
    }
}

fn decode<T: DeserializeOwned>(source: Source, raw: &Value) -> Result<T, NormalizeError> {
    T::deserialize(raw).map_err(|e| NormalizeError::new(source, e.to_string()))
}
