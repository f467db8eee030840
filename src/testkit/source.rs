//! Mock dictionary sources.

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;

use crate::domain::{Query, Source};
use crate::error::{UpstreamCause, UpstreamError};
use crate::port::outbound::dictionary::DictionarySource;

/// A source that returns the same scripted reply on every call.
pub struct ScriptedSource {
    source: Source,
    reply: Result<Value, UpstreamError>,
    delay: Option<Duration>,
    calls: AtomicU32,
    queries: Mutex<Vec<String>>,
}

impl ScriptedSource {
    /// Always answer with `raw`.
    pub fn ok(source: Source, raw: Value) -> Self {
        Self::with_reply(source, Ok(raw))
    }

    /// Always fail with a network error.
    pub fn failing(source: Source) -> Self {
        Self::with_reply(
            source,
            Err(UpstreamError::new(
                source,
                UpstreamCause::Network("connection refused".into()),
            )),
        )
    }

    pub fn with_reply(source: Source, reply: Result<Value, UpstreamError>) -> Self {
        Self {
            source,
            reply,
            delay: None,
            calls: AtomicU32::new(0),
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Sleep before replying, to exercise stage timeouts.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Shared call counter.
    pub fn call_count(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    /// Queries received so far, in order.
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().clone()
    }
}

#[async_trait]
impl DictionarySource for ScriptedSource {
    fn source(&self) -> Source {
        self.source
    }

    async fn fetch(&self, query: &Query) -> Result<Value, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().push(query.as_str().to_string());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.reply.clone()
    }
}
