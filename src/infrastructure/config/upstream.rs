//! Upstream endpoints and HTTP timeouts.

use serde::Deserialize;

use crate::adapter::outbound::{google_handwriting, jotoba, kanjiapi};

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    /// Bound on each upstream call, in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Connect timeout in milliseconds.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    #[serde(default = "default_jotoba_url")]
    pub jotoba_url: String,
    /// Base URL; `/words/{kanji}` and `/kanji/{kanji}` are appended.
    #[serde(default = "default_kanjiapi_url")]
    pub kanjiapi_url: String,
    #[serde(default = "default_handwriting_url")]
    pub handwriting_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
            jotoba_url: default_jotoba_url(),
            kanjiapi_url: default_kanjiapi_url(),
            handwriting_url: default_handwriting_url(),
            user_agent: default_user_agent(),
        }
    }
}

const fn default_timeout_ms() -> u64 {
    4000
}

const fn default_connect_timeout_ms() -> u64 {
    2000
}

fn default_jotoba_url() -> String {
    jotoba::DEFAULT_URL.into()
}

fn default_kanjiapi_url() -> String {
    kanjiapi::DEFAULT_BASE_URL.into()
}

fn default_handwriting_url() -> String {
    google_handwriting::DEFAULT_URL.into()
}

fn default_user_agent() -> String {
    concat!("minireader/", env!("CARGO_PKG_VERSION")).into()
}
