//! kanjiapi.dev `/v1/kanji/{kanji}` responses.

use serde::Deserialize;

use crate::domain::{jlpt_tag, Entry, JapaneseForm, Sense};

const MAX_MEANINGS: usize = 5;

#[derive(Debug, Deserialize)]
pub(super) struct Kanji {
    #[serde(default)]
    kun_readings: Vec<String>,
    #[serde(default)]
    on_readings: Vec<String>,
    #[serde(default)]
    meanings: Vec<String>,
    #[serde(default)]
    jlpt: Option<u8>,
}

/// Synthesize at most one entry for `character`.
///
/// The entry carries a single form: the character with its first kun
/// reading, falling back to the first on reading.
pub(super) fn normalize(kanji: Kanji, character: char) -> Vec<Entry> {
    let reading = kanji
        .kun_readings
        .iter()
        .map(|r| strip_kun_markers(r))
        .chain(kanji.on_readings.iter().cloned())
        .find(|r| !r.is_empty());
    let meanings: Vec<String> = kanji.meanings.into_iter().take(MAX_MEANINGS).collect();

    if reading.is_none() && meanings.is_empty() {
        return Vec::new();
    }

    vec![Entry {
        japanese: vec![JapaneseForm::new(
            character.to_string(),
            reading.unwrap_or_default(),
        )],
        senses: vec![Sense::new(meanings, Vec::new())],
        jlpt: kanji.jlpt.map(jlpt_tag).into_iter().collect(),
        is_common: false,
    }]
}

/// `た.べる` → `たべる`, `-ぎ` → `ぎ`.
fn strip_kun_markers(reading: &str) -> String {
    reading.replace('.', "").trim_matches('-').to_string()
}
