//! Jotoba word search responses.

use serde::Deserialize;
use serde_json::Value;

use super::pos::flatten_parts_of_speech;
use crate::domain::{jlpt_tag, Entry, JapaneseForm, Sense};

#[derive(Debug, Deserialize)]
pub(super) struct Response {
    #[serde(default)]
    words: Vec<Word>,
}

#[derive(Debug, Deserialize)]
struct Word {
    #[serde(default)]
    reading: Option<Reading>,
    #[serde(default)]
    senses: Vec<WordSense>,
    #[serde(default)]
    jlpt_lvl: Option<u8>,
    #[serde(default)]
    common: bool,
}

#[derive(Debug, Default, Deserialize)]
struct Reading {
    #[serde(default)]
    kanji: Option<String>,
    #[serde(default)]
    kana: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WordSense {
    #[serde(default)]
    glosses: Vec<String>,
    #[serde(default)]
    pos: Value,
}

pub(super) fn normalize(response: Response) -> Vec<Entry> {
    response.words.into_iter().map(to_entry).collect()
}

fn to_entry(word: Word) -> Entry {
    let reading = word.reading.unwrap_or_default();
    let kana = reading.kana.unwrap_or_default();
    let headword = reading
        .kanji
        .filter(|k| !k.is_empty())
        .unwrap_or_else(|| kana.clone());

    Entry {
        japanese: vec![JapaneseForm::new(headword, kana)],
        senses: word
            .senses
            .into_iter()
            .map(|s| Sense::new(s.glosses, flatten_parts_of_speech(&s.pos)))
            .collect(),
        jlpt: word.jlpt_lvl.map(jlpt_tag).into_iter().collect(),
        is_common: word.common,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run(raw: Value) -> Vec<Entry> {
        normalize(serde_json::from_value(raw).unwrap())
    }

    #[test]
    fn maps_reading_senses_and_tags() {
        let entries = run(json!({
            "words": [{
                "reading": {"kana": "たべる", "kanji": "食べる", "furigana": "[食|た]べる"},
                "common": true,
                "senses": [
                    {"glosses": ["to eat"], "pos": [{"Verb": {"Ichidan": "Normal"}}, "Transitive"], "language": "English"},
                    {"glosses": ["to live on"], "pos": {"Verb": "Ichidan"}}
                ],
                "jlpt_lvl": 5
            }]
        }));

        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.headword(), "食べる");
        assert_eq!(entry.reading(), "たべる");
        assert_eq!(entry.senses[0].parts_of_speech, vec!["Verb", "Transitive"]);
        assert_eq!(entry.senses[1].parts_of_speech, vec!["Verb"]);
        assert_eq!(entry.jlpt, vec!["jlpt-n5"]);
        assert!(entry.is_common);
    }

    #[test]
    fn kana_only_word_uses_kana_as_headword() {
        let entries = run(json!({
            "words": [{"reading": {"kana": "ありがとう"}, "senses": [{"glosses": ["thank you"]}]}]
        }));
        assert_eq!(entries[0].headword(), "ありがとう");
        assert_eq!(entries[0].reading(), "ありがとう");
        assert!(entries[0].jlpt.is_empty());
        assert!(!entries[0].is_common);
    }

    #[test]
    fn missing_words_is_empty() {
        assert!(run(json!({"kanji": []})).is_empty());
    }
}
