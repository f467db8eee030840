//! Handwriting use cases.
//!
//! There is no fallback chain here: one recognizer call per request, and
//! its failure is surfaced directly.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use super::candidates::extract_candidates;
use crate::domain::{InkPayload, Source};
use crate::error::{HandwriteError, UpstreamCause, UpstreamError};
use crate::port::outbound::handwriting::{HandwritingRecognizer, RecognizerReply};

/// Candidates returned by [`HandwriteService::candidates`] are capped here.
pub const MAX_CANDIDATES: usize = 12;

pub struct HandwriteService {
    recognizer: Arc<dyn HandwritingRecognizer>,
    timeout: Duration,
}

impl HandwriteService {
    #[must_use]
    pub fn new(recognizer: Arc<dyn HandwritingRecognizer>, timeout: Duration) -> Self {
        Self {
            recognizer,
            timeout,
        }
    }

    /// Validate a request body and forward it to the recognizer.
    ///
    /// Strokes with fewer than two points are dropped before forwarding;
    /// every other field of the body reaches the recognizer unchanged.
    /// The recognizer's reply is returned as-is, whatever its status.
    ///
    /// # Errors
    ///
    /// [`HandwriteError::Ink`] when the body is unparsable or has nothing to
    /// recognize (no upstream call is made), [`HandwriteError::Upstream`]
    /// on transport failure or timeout.
    pub async fn proxy(&self, body: &[u8]) -> Result<RecognizerReply, HandwriteError> {
        let payload = InkPayload::from_slice(body)?.into_usable()?;
        self.recognize(&payload).await
    }

    /// Recognize a payload and return the mined candidates.
    ///
    /// # Errors
    ///
    /// As for [`proxy`](Self::proxy); additionally a non-2xx reply or a
    /// non-JSON body is an [`HandwriteError::Upstream`] error.
    pub async fn candidates(&self, body: &[u8]) -> Result<Vec<String>, HandwriteError> {
        let reply = self.proxy(body).await?;
        if !reply.is_success() {
            return Err(
                UpstreamError::new(Source::Handwriting, UpstreamCause::Status(reply.status)).into(),
            );
        }

        let json = reply.json().map_err(|e| {
            UpstreamError::new(Source::Handwriting, UpstreamCause::Decode(e.to_string()))
        })?;

        let mut candidates = extract_candidates(&json);
        candidates.truncate(MAX_CANDIDATES);
        debug!(count = candidates.len(), "Extracted handwriting candidates");
        Ok(candidates)
    }

    async fn recognize(&self, payload: &InkPayload) -> Result<RecognizerReply, HandwriteError> {
        debug!(strokes = payload.usable_strokes(), "Forwarding ink");
        let err = match tokio::time::timeout(self.timeout, self.recognizer.recognize(payload)).await
        {
            Ok(Ok(reply)) => return Ok(reply),
            Ok(Err(err)) => err,
            Err(_) => UpstreamError::timeout(Source::Handwriting),
        };
        warn!(error = %err, "Handwriting recognition failed");
        Err(err.into())
    }
}
