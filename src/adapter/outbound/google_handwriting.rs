//! Google Input Tools handwriting client.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE, ORIGIN, REFERER};
use reqwest::Client as HttpClient;

use crate::domain::{InkPayload, Source};
use crate::error::UpstreamError;
use crate::port::outbound::handwriting::{HandwritingRecognizer, RecognizerReply};

/// Public Input Tools recognition endpoint.
pub const DEFAULT_URL: &str =
    "https://www.google.com/inputtools/request?ime=handwriting&app=translate&cs=1";

/// The endpoint only answers requests that look like they come from Translate.
const ORIGIN_VALUE: &str = "https://translate.google.com";
const REFERER_VALUE: &str = "https://translate.google.com/";

pub struct GoogleHandwriting {
    http: HttpClient,
    url: String,
}

impl GoogleHandwriting {
    #[must_use]
    pub fn new(http: HttpClient, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }
}

#[async_trait]
impl HandwritingRecognizer for GoogleHandwriting {
    async fn recognize(&self, payload: &InkPayload) -> Result<RecognizerReply, UpstreamError> {
        let source = Source::Handwriting;
        let response = self
            .http
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json; charset=UTF-8")
            .header(ACCEPT, "application/json")
            .header(ORIGIN, ORIGIN_VALUE)
            .header(REFERER, REFERER_VALUE)
            .json(payload)
            .send()
            .await
            .map_err(|e| UpstreamError::from_reqwest(source, &e))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| UpstreamError::from_reqwest(source, &e))?;
        Ok(RecognizerReply::new(status, body))
    }
}
