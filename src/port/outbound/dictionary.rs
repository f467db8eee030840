//! Upstream dictionary source port.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{Query, Source};
use crate::error::UpstreamError;

/// One upstream dictionary service.
///
/// Implementations know the service's request shape and return its raw
/// JSON response; turning that into entries is the job of
/// [`crate::application::lookup::normalize`].
///
/// # Errors
///
/// [`fetch`](Self::fetch) returns an [`UpstreamError`] for transport
/// failures, timeouts and non-2xx statuses alike.
#[async_trait]
pub trait DictionarySource: Send + Sync {
    /// Which source this is, used for normalization and the response tag.
    fn source(&self) -> Source;

    /// Query the service and return the raw response body.
    async fn fetch(&self, query: &Query) -> Result<Value, UpstreamError>;
}
