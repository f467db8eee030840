//! User queries and the CJK predicates that route them.

use std::fmt;

/// Returns true when `c` is a CJK unified ideograph (basic block or extension A).
#[must_use]
pub fn is_kanji(c: char) -> bool {
    matches!(c, '\u{4E00}'..='\u{9FFF}' | '\u{3400}'..='\u{4DBF}')
}

/// Returns true when `s` contains at least one kana or kanji code point.
#[must_use]
pub fn is_cjk_string(s: &str) -> bool {
    s.chars()
        .any(|c| matches!(c, '\u{3040}'..='\u{30FF}' | '\u{3400}'..='\u{9FFF}'))
}

/// A trimmed, non-empty dictionary query.
///
/// Construction goes through [`Query::parse`], so every `Query` holds at
/// least one character.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query {
    text: String,
}

impl Query {
    /// Parse a raw keyword. Returns `None` when nothing is left after trimming.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            text: text.to_string(),
        })
    }

    /// The trimmed query text as sent upstream.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// First character of the query.
    #[must_use]
    pub fn first_char(&self) -> char {
        self.text.chars().next().unwrap_or_default()
    }

    /// True iff the first code point is a CJK ideograph.
    ///
    /// Only the first character is inspected: `猫舌` routes down the kanji
    /// path exactly like `猫`.
    #[must_use]
    pub fn is_single_kanji(&self) -> bool {
        is_kanji(self.first_char())
    }

    /// Key used for cache lookups.
    ///
    /// Lowercased with interior whitespace runs collapsed, so `" Neko  San"`
    /// and `"neko san"` share a record.
    #[must_use]
    pub fn normalized_key(&self) -> String {
        self.text
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
