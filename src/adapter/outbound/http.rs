//! Shared HTTP plumbing for upstream adapters.

use std::time::Duration;

use reqwest::{Client as HttpClient, RequestBuilder};
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::Source;
use crate::error::UpstreamError;

/// Build an HTTP client with per-request and connect timeouts.
///
/// Falls back to a default client if the builder fails.
#[must_use]
pub fn build_client(timeout: Duration, connect_timeout: Duration, user_agent: &str) -> HttpClient {
    HttpClient::builder()
        .timeout(timeout)
        .connect_timeout(connect_timeout)
        .user_agent(user_agent)
        .build()
        .unwrap_or_else(|err| {
            warn!(error = %err, "Failed to build HTTP client, using defaults");
            HttpClient::new()
        })
}

/// Send a request and parse a 2xx JSON body.
///
/// # Errors
///
/// Transport failures, timeouts, non-2xx statuses and undecodable bodies
/// all become an [`UpstreamError`] tagged with `source`.
pub async fn send_json(source: Source, request: RequestBuilder) -> Result<Value, UpstreamError> {
    let response = request
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(|e| UpstreamError::from_reqwest(source, &e))?;

    debug!(source = %source, status = response.status().as_u16(), "Upstream responded");

    response
        .json::<Value>()
        .await
        .map_err(|e| UpstreamError::from_reqwest(source, &e))
}
