//! Canonical dictionary entries.
//!
//! The wire shape is the legacy Jisho schema the study UI reads:
//! `japanese[0].word`, `japanese[0].reading`, `senses[0].english_definitions`,
//! `senses[0].parts_of_speech` and `jlpt[0]`. Field names and nesting must
//! not change.

use serde::{Deserialize, Serialize};

/// One dictionary entry, immutable once normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Written forms; the first one is the headword.
    pub japanese: Vec<JapaneseForm>,
    /// English senses in source order.
    pub senses: Vec<Sense>,
    /// JLPT level tags such as `"jlpt-n3"`.
    #[serde(default)]
    pub jlpt: Vec<String>,
    #[serde(default)]
    pub is_common: bool,
}

/// A written form paired with its kana reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JapaneseForm {
    pub word: String,
    pub reading: String,
}

/// One sense: English glosses plus flattened grammatical tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sense {
    pub english_definitions: Vec<String>,
    pub parts_of_speech: Vec<String>,
}

impl Entry {
    /// Entry with a single form and a single sense without grammatical tags.
    #[must_use]
    pub fn simple(
        word: impl Into<String>,
        reading: impl Into<String>,
        glosses: Vec<String>,
    ) -> Self {
        Self {
            japanese: vec![JapaneseForm::new(word, reading)],
            senses: vec![Sense::new(glosses, Vec::new())],
            jlpt: Vec::new(),
            is_common: false,
        }
    }

    /// The primary written form, or `""` when there is none.
    #[must_use]
    pub fn headword(&self) -> &str {
        self.japanese.first().map_or("", |form| form.word.as_str())
    }

    /// Reading of the primary form, or `""` when there is none.
    #[must_use]
    pub fn reading(&self) -> &str {
        self.japanese.first().map_or("", |form| form.reading.as_str())
    }

    /// All glosses across senses, in order.
    pub fn glosses(&self) -> impl Iterator<Item = &str> {
        self.senses
            .iter()
            .flat_map(|sense| sense.english_definitions.iter().map(String::as_str))
    }

    /// An entry is usable only if it carries at least one gloss.
    #[must_use]
    pub fn has_glosses(&self) -> bool {
        self.glosses().next().is_some()
    }
}

impl JapaneseForm {
    pub fn new(word: impl Into<String>, reading: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            reading: reading.into(),
        }
    }
}

impl Sense {
    #[must_use]
    pub fn new(english_definitions: Vec<String>, parts_of_speech: Vec<String>) -> Self {
        Self {
            english_definitions,
            parts_of_speech,
        }
    }
}

/// Tag for a JLPT level, e.g. `jlpt_tag(3) == "jlpt-n3"`.
#[must_use]
pub fn jlpt_tag(level: u8) -> String {
    format!("jlpt-n{level}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_to_legacy_schema() {
        let entry = Entry {
            japanese: vec![JapaneseForm::new("猫", "ねこ")],
            senses: vec![Sense::new(vec!["cat".into()], vec!["Noun".into()])],
            jlpt: vec![jlpt_tag(3)],
            is_common: true,
        };

        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            json!({
                "japanese": [{"word": "猫", "reading": "ねこ"}],
                "senses": [{"english_definitions": ["cat"], "parts_of_speech": ["Noun"]}],
                "jlpt": ["jlpt-n3"],
                "is_common": true
            })
        );
    }

    #[test]
    fn headword_and_reading_fall_back_to_empty() {
        let entry = Entry {
            japanese: vec![],
            senses: vec![],
            jlpt: vec![],
            is_common: false,
        };
        assert_eq!(entry.headword(), "");
        assert_eq!(entry.reading(), "");
        assert!(!entry.has_glosses());
    }

    #[test]
    fn glosses_span_all_senses() {
        let mut entry = Entry::simple("見る", "みる", vec!["to see".into()]);
        entry
            .senses
            .push(Sense::new(vec!["to look".into(), "to watch".into()], vec![]));
        assert_eq!(
            entry.glosses().collect::<Vec<_>>(),
            vec!["to see", "to look", "to watch"]
        );
    }

    #[test]
    fn sense_without_definitions_is_not_usable() {
        let entry = Entry::simple("猫", "ねこ", vec![]);
        assert!(!entry.has_glosses());
    }
}
