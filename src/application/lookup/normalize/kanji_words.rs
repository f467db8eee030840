//! kanjiapi.dev `/v1/words/{kanji}` responses.

use serde::Deserialize;

use super::NormalizeLimits;
use crate::domain::Entry;

#[derive(Debug, Deserialize)]
pub(super) struct Word {
    #[serde(default)]
    variants: Vec<Variant>,
    #[serde(default)]
    meanings_in_context: Vec<ContextMeaning>,
    #[serde(default)]
    meanings: Vec<Meaning>,
}

#[derive(Debug, Deserialize)]
struct Variant {
    #[serde(default)]
    written: Option<String>,
    #[serde(default)]
    pronounced: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ContextMeaning {
    #[serde(default)]
    meaning: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Meaning {
    #[serde(default)]
    glosses: Vec<String>,
}

pub(super) fn normalize(words: Vec<Word>, query: &str, limits: &NormalizeLimits) -> Vec<Entry> {
    let mut out = Vec::new();
    for word in words {
        let Some(variant) = pick_variant(&word.variants, query) else {
            continue;
        };

        let meanings: Vec<String> = word
            .meanings_in_context
            .iter()
            .filter_map(|m| m.meaning.clone())
            .chain(word.meanings.iter().flat_map(|m| m.glosses.iter().cloned()))
            .filter(|m| !m.is_empty())
            .take(limits.max_meanings_per_word)
            .collect();
        if meanings.is_empty() {
            continue;
        }

        out.push(Entry::simple(
            variant.written.clone().unwrap_or_default(),
            variant.pronounced.clone().unwrap_or_default(),
            meanings,
        ));
        if out.len() >= limits.max_kanji_words {
            break;
        }
    }
    out
}

/// Prefer a variant whose written form contains the query, is contained by
/// it, or starts with it; otherwise take the first variant.
fn pick_variant<'a>(variants: &'a [Variant], query: &str) -> Option<&'a Variant> {
    variants
        .iter()
        .find(|v| {
            v.written.as_deref().is_some_and(|written| {
                !written.is_empty()
                    && (written.contains(query)
                        || query.contains(written)
                        || written.starts_with(query))
            })
        })
        .or_else(|| variants.first())
}
