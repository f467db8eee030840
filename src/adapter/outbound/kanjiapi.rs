//! kanjiapi.dev client.
//!
//! One HTTP client backs two sources: words containing a kanji
//! (`GET {base}/words/{kanji}`) and the kanji's own detail
//! (`GET {base}/kanji/{kanji}`). Both look up the query's first character.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde_json::Value;
use url::Url;

use super::http::send_json;
use crate::domain::{Query, Source};
use crate::error::{ConfigError, Result, UpstreamError};
use crate::port::outbound::dictionary::DictionarySource;

/// Public kanjiapi.dev base URL.
pub const DEFAULT_BASE_URL: &str = "https://kanjiapi.dev/v1";

pub struct KanjiapiClient {
    http: HttpClient,
    base_url: Url,
}

impl KanjiapiClient {
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute hierarchical URL.
    pub fn new(http: HttpClient, base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::InvalidValue {
                field: "kanjiapi_url",
                reason: format!("{base_url} cannot be used as a base URL"),
            }
            .into());
        }
        Ok(Self { http, base_url })
    }

    /// `{base}/{collection}/{character}` with the character percent-encoded.
    #[must_use]
    pub fn endpoint(&self, collection: &str, character: char) -> Url {
        let mut url = self.base_url.clone();
        let mut buf = [0u8; 4];
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .push(collection)
                .push(character.encode_utf8(&mut buf));
        }
        url
    }

    async fn get(
        &self,
        source: Source,
        collection: &str,
        character: char,
    ) -> std::result::Result<Value, UpstreamError> {
        let request = self
            .http
            .get(self.endpoint(collection, character))
            .header(reqwest::header::ACCEPT, "application/json");
        send_json(source, request).await
    }
}

/// Words containing the query's leading kanji.
pub struct KanjiWords(pub Arc<KanjiapiClient>);

/// Readings and meanings of the query's leading kanji.
pub struct KanjiDetail(pub Arc<KanjiapiClient>);

#[async_trait]
impl DictionarySource for KanjiWords {
    fn source(&self) -> Source {
        Source::KanjiWords
    }

    async fn fetch(&self, query: &Query) -> std::result::Result<Value, UpstreamError> {
        self.0
            .get(Source::KanjiWords, "words", query.first_char())
            .await
    }
}

#[async_trait]
impl DictionarySource for KanjiDetail {
    fn source(&self) -> Source {
        Source::KanjiDetail
    }

    async fn fetch(&self, query: &Query) -> std::result::Result<Value, UpstreamError> {
        self.0
            .get(Source::KanjiDetail, "kanji", query.first_char())
            .await
    }
}
