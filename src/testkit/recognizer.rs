//! Mock handwriting recognizer.

use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::{InkPayload, Source};
use crate::error::{UpstreamCause, UpstreamError};
use crate::port::outbound::handwriting::{HandwritingRecognizer, RecognizerReply};

/// A recognizer with a fixed reply that records what it was sent.
pub struct ScriptedRecognizer {
    reply: Result<RecognizerReply, UpstreamError>,
    calls: AtomicU32,
    last_payload: Mutex<Option<InkPayload>>,
}

impl ScriptedRecognizer {
    pub fn replying(status: u16, body: impl Into<String>) -> Self {
        Self::with_reply(Ok(RecognizerReply::new(status, body)))
    }

    pub fn failing() -> Self {
        Self::with_reply(Err(UpstreamError::new(
            Source::Handwriting,
            UpstreamCause::Network("connection reset".into()),
        )))
    }

    pub fn with_reply(reply: Result<RecognizerReply, UpstreamError>) -> Self {
        Self {
            reply,
            calls: AtomicU32::new(0),
            last_payload: Mutex::new(None),
        }
    }

    pub fn call_count(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_payload(&self) -> Option<InkPayload> {
        self.last_payload.lock().clone()
    }
}

#[async_trait]
impl HandwritingRecognizer for ScriptedRecognizer {
    async fn recognize(&self, payload: &InkPayload) -> Result<RecognizerReply, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_payload.lock() = Some(payload.clone());
        self.reply.clone()
    }
}
