//! Result cache freshness configuration.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Freshness window for word results, also the `max-age` of successful
    /// responses.
    #[serde(default = "default_fresh_secs")]
    pub fresh_secs: u32,
    /// Freshness window for kanji-detail results, also the `max-age` of
    /// successful kanji-detail responses.
    #[serde(default = "default_detail_fresh_secs")]
    pub detail_fresh_secs: u32,
    /// `max-age` of stale-served responses.
    #[serde(default = "default_stale_max_age_secs")]
    pub stale_max_age_secs: u32,
    /// Records older than this are never served.
    #[serde(default = "default_max_stale_secs")]
    pub max_stale_secs: u32,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            fresh_secs: default_fresh_secs(),
            detail_fresh_secs: default_detail_fresh_secs(),
            stale_max_age_secs: default_stale_max_age_secs(),
            max_stale_secs: default_max_stale_secs(),
        }
    }
}

const fn default_fresh_secs() -> u32 {
    600
}

const fn default_detail_fresh_secs() -> u32 {
    300
}

const fn default_stale_max_age_secs() -> u32 {
    60
}

const fn default_max_stale_secs() -> u32 {
    7 * 24 * 60 * 60
}
