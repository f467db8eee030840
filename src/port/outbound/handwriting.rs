//! Handwriting recognition port.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::InkPayload;
use crate::error::UpstreamError;

/// Raw reply from the recognizer, forwarded verbatim by the proxy route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognizerReply {
    pub status: u16,
    pub body: String,
}

impl RecognizerReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns the parse error when the body is not JSON.
    pub fn json(&self) -> serde_json::Result<Value> {
        serde_json::from_str(&self.body)
    }
}

/// Ink-to-text recognition service.
///
/// Unlike dictionary sources, a non-2xx reply is returned as-is rather
/// than as an error; only transport failures are errors.
#[async_trait]
pub trait HandwritingRecognizer: Send + Sync {
    async fn recognize(&self, payload: &InkPayload) -> Result<RecognizerReply, UpstreamError>;
}
