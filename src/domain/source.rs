//! Upstream source tags.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The upstream service a result came from.
///
/// The serialized form is the `source` tag reported in response metadata
/// and accepted in the `[lookup] sources` priority list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    /// Jotoba word search (primary).
    #[serde(rename = "jotoba")]
    Jotoba,
    /// kanjiapi.dev words containing a kanji.
    #[serde(rename = "kanjiapi")]
    KanjiWords,
    /// kanjiapi.dev detail for a single kanji.
    #[serde(rename = "kanjiapi-detail")]
    KanjiDetail,
    /// Google Input Tools handwriting recognition.
    #[serde(rename = "google-handwriting")]
    Handwriting,
}

impl Source {
    /// Wire tag for this source.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Jotoba => "jotoba",
            Self::KanjiWords => "kanjiapi",
            Self::KanjiDetail => "kanjiapi-detail",
            Self::Handwriting => "google-handwriting",
        }
    }

    /// Sources that are only consulted for queries starting with a kanji.
    #[must_use]
    pub const fn kanji_only(self) -> bool {
        matches!(self, Self::KanjiWords | Self::KanjiDetail)
    }

    /// Sources that produce dictionary entries.
    #[must_use]
    pub const fn is_dictionary(self) -> bool {
        !matches!(self, Self::Handwriting)
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_tag_matches_display() {
        for source in [
            Source::Jotoba,
            Source::KanjiWords,
            Source::KanjiDetail,
            Source::Handwriting,
        ] {
            let json = serde_json::to_value(source).unwrap();
            assert_eq!(json, source.tag());
            assert_eq!(source.to_string(), source.tag());
        }
    }

    #[test]
    fn only_kanjiapi_sources_are_kanji_only() {
        assert!(!Source::Jotoba.kanji_only());
        assert!(Source::KanjiWords.kanji_only());
        assert!(Source::KanjiDetail.kanji_only());
    }
}
