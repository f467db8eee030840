//! Raw upstream payload builders.

use serde_json::{json, Value};

/// Jotoba response with one word per `(kanji, kana, glosses)` triple.
///
/// An empty `kanji` produces a kana-only word.
pub fn jotoba_words(words: &[(&str, &str, &[&str])]) -> Value {
    let words: Vec<Value> = words
        .iter()
        .map(|(kanji, kana, glosses)| {
            let reading = if kanji.is_empty() {
                json!({ "kana": kana })
            } else {
                json!({ "kanji": kanji, "kana": kana })
            };
            json!({
                "reading": reading,
                "senses": [{ "glosses": glosses, "pos": "Noun" }]
            })
        })
        .collect();
    json!({ "words": words })
}

/// Jotoba response for 猫 / ねこ / "cat".
pub fn jotoba_cat() -> Value {
    jotoba_words(&[("猫", "ねこ", &["cat"])])
}

/// kanjiapi.dev `/v1/words` response, one word per `(written, pronounced, meanings)`.
pub fn kanji_words(words: &[(&str, &str, &[&str])]) -> Value {
    Value::Array(
        words
            .iter()
            .map(|(written, pronounced, meanings)| {
                json!({
                    "variants": [{ "written": written, "pronounced": pronounced, "priorities": [] }],
                    "meanings": [{ "glosses": meanings }]
                })
            })
            .collect(),
    )
}

/// kanjiapi.dev `/v1/kanji` response.
pub fn kanji_detail(kun: &[&str], on: &[&str], meanings: &[&str]) -> Value {
    json!({
        "kun_readings": kun,
        "on_readings": on,
        "meanings": meanings,
        "jlpt": null
    })
}

/// A `/handwrite` request body; each stroke is a list of `(x, y)` points.
pub fn ink_body(strokes: &[&[(i64, i64)]]) -> String {
    let ink: Vec<Value> = strokes
        .iter()
        .map(|points| {
            let xs: Vec<i64> = points.iter().map(|p| p.0).collect();
            let ys: Vec<i64> = points.iter().map(|p| p.1).collect();
            let ts: Vec<i64> = (0..points.len()).map(|i| i as i64 * 16).collect();
            json!([xs, ys, ts])
        })
        .collect();
    json!({
        "device": "testkit",
        "options": "enable_pre_space",
        "requests": [{
            "writing_guide": { "writing_area_width": 300, "writing_area_height": 300 },
            "ink": ink,
            "language": "ja"
        }]
    })
    .to_string()
}
