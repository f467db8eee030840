//! Jotoba word search client.
//!
//! `POST {url}` with `{"query", "language", "no_english"}`; the response
//! carries a `words` array.

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::Serialize;
use serde_json::Value;

use super::http::send_json;
use crate::domain::{Query, Source};
use crate::error::UpstreamError;
use crate::port::outbound::dictionary::DictionarySource;

/// Public Jotoba word search endpoint.
pub const DEFAULT_URL: &str = "https://jotoba.de/api/search/words";

#[derive(Serialize)]
struct SearchRequest<'a> {
    query: &'a str,
    language: &'static str,
    no_english: bool,
}

/// Primary word-search source.
pub struct JotobaClient {
    http: HttpClient,
    url: String,
}

impl JotobaClient {
    #[must_use]
    pub fn new(http: HttpClient, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }
}

#[async_trait]
impl DictionarySource for JotobaClient {
    fn source(&self) -> Source {
        Source::Jotoba
    }

    async fn fetch(&self, query: &Query) -> Result<Value, UpstreamError> {
        let body = SearchRequest {
            query: query.as_str(),
            language: "English",
            no_english: false,
        };
        let request = self
            .http
            .post(&self.url)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&body);
        send_json(Source::Jotoba, request).await
    }
}
