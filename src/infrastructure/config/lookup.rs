//! Fallback chain configuration.

use serde::Deserialize;

use crate::application::lookup::NormalizeLimits;
use crate::domain::Source;

#[derive(Debug, Clone, Deserialize)]
pub struct LookupConfig {
    /// Sources in priority order. Kanji-only sources are skipped for
    /// queries that do not start with a kanji.
    #[serde(default = "default_sources")]
    pub sources: Vec<Source>,
    /// Maximum entries taken from the kanji-indexed word list.
    #[serde(default = "default_max_kanji_words")]
    pub max_kanji_words: usize,
    /// Maximum meanings kept per kanji-indexed word.
    #[serde(default = "default_max_meanings_per_word")]
    pub max_meanings_per_word: usize,
}

impl LookupConfig {
    #[must_use]
    pub fn limits(&self) -> NormalizeLimits {
        NormalizeLimits {
            max_kanji_words: self.max_kanji_words,
            max_meanings_per_word: self.max_meanings_per_word,
        }
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            sources: default_sources(),
            max_kanji_words: default_max_kanji_words(),
            max_meanings_per_word: default_max_meanings_per_word(),
        }
    }
}

fn default_sources() -> Vec<Source> {
    vec![Source::Jotoba, Source::KanjiWords, Source::KanjiDetail]
}

const fn default_max_kanji_words() -> usize {
    NormalizeLimits::DEFAULT_MAX_KANJI_WORDS
}

const fn default_max_meanings_per_word() -> usize {
    NormalizeLimits::DEFAULT_MAX_MEANINGS_PER_WORD
}
