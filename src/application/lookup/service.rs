//! Priority-ordered fallback orchestration.
//!
//! Per request the chain runs strictly in sequence:
//!
//! 1. **Validate**: a blank keyword is rejected without any upstream call.
//! 2. **Fresh cache**: a record inside its freshness window is returned.
//! 3. **Sources**: each configured source runs in priority order under the
//!    stage timeout. Kanji-only sources are skipped unless the query starts
//!    with a kanji. The first stage with at least one usable entry wins and
//!    is written to the cache.
//! 4. **Stale cache**: when every stage failed or came back empty, any
//!    record still inside the stale bound is served.
//! 5. **Unavailable**: otherwise the failures are reported.

use std::sync::Arc;
use std::time::Duration as StdDuration;

use chrono::{Duration, Utc};
use tracing::{debug, info, warn};

use super::normalize::{normalize, NormalizeLimits};
use crate::domain::{CacheKey, CacheRecord, Entry, Query, Source};
use crate::error::UpstreamError;
use crate::port::outbound::cache::CacheStore;
use crate::port::outbound::dictionary::DictionarySource;

/// Timeouts, freshness windows and limits for the lookup chain.
#[derive(Debug, Clone)]
pub struct LookupSettings {
    /// Upper bound on each upstream call.
    pub stage_timeout: StdDuration,
    /// Freshness window for word results.
    pub fresh_for: Duration,
    /// Freshness window for synthesized kanji-detail results.
    pub detail_fresh_for: Duration,
    /// Records older than this are never served, not even as stale data.
    pub max_stale: Duration,
    pub limits: NormalizeLimits,
}

impl Default for LookupSettings {
    fn default() -> Self {
        Self {
            stage_timeout: StdDuration::from_millis(4000),
            fresh_for: Duration::seconds(600),
            detail_fresh_for: Duration::seconds(300),
            max_stale: Duration::days(7),
            limits: NormalizeLimits::default(),
        }
    }
}

impl LookupSettings {
    /// Freshness window for results produced by `source`.
    #[must_use]
    pub fn fresh_for(&self, source: Source) -> Duration {
        match source {
            Source::KanjiDetail => self.detail_fresh_for,
            _ => self.fresh_for,
        }
    }
}

/// Where a successful result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// Produced by an upstream call during this request.
    Upstream,
    /// Served from a record inside its freshness window.
    FreshCache,
    /// Served from an expired record because every upstream failed.
    StaleCache,
}

/// Result of one lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    /// The keyword was empty after trimming.
    MissingKeyword,
    /// At least one usable entry.
    Found {
        source: Source,
        entries: Vec<Entry>,
        provenance: Provenance,
    },
    /// Every stage failed or was empty and nothing was cached.
    Unavailable { failures: Vec<UpstreamError> },
}

/// The fallback orchestrator.
pub struct LookupService {
    sources: Vec<Arc<dyn DictionarySource>>,
    cache: Arc<dyn CacheStore>,
    settings: LookupSettings,
}

impl LookupService {
    /// Build an orchestrator over `sources`, tried in the given order.
    #[must_use]
    pub fn new(
        sources: Vec<Arc<dyn DictionarySource>>,
        cache: Arc<dyn CacheStore>,
        settings: LookupSettings,
    ) -> Self {
        Self {
            sources,
            cache,
            settings,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &LookupSettings {
        &self.settings
    }

    /// Source tags in priority order.
    #[must_use]
    pub fn source_order(&self) -> Vec<Source> {
        self.sources.iter().map(|s| s.source()).collect()
    }

    /// Run the chain for a raw keyword.
    pub async fn lookup(&self, keyword: &str) -> LookupOutcome {
        let Some(query) = Query::parse(keyword) else {
            debug!("Rejected empty keyword");
            return LookupOutcome::MissingKeyword;
        };

        let key = CacheKey::dictionary(&query);
        let now = Utc::now();
        let cached = self
            .cache
            .get(&key)
            .filter(|record| record.age_at(now) <= self.settings.max_stale);

        if let Some(record) = cached.as_ref().filter(|r| r.is_fresh_at(now)) {
            debug!(key = %key, source = %record.source, "Serving fresh cache");
            return LookupOutcome::Found {
                source: record.source,
                entries: record.entries.clone(),
                provenance: Provenance::FreshCache,
            };
        }

        let mut failures = Vec::new();
        for source in &self.sources {
            let tag = source.source();
            if tag.kanji_only() && !query.is_single_kanji() {
                continue;
            }

            match self.run_stage(source.as_ref(), &query).await {
                Ok(entries) if !entries.is_empty() => {
                    info!(query = %query, source = %tag, count = entries.len(), "Lookup succeeded");
                    self.cache.put(
                        key,
                        CacheRecord::new(entries.clone(), tag, self.settings.fresh_for(tag)),
                    );
                    return LookupOutcome::Found {
                        source: tag,
                        entries,
                        provenance: Provenance::Upstream,
                    };
                }
                Ok(_) => debug!(query = %query, source = %tag, "No usable entries"),
                Err(err) => {
                    warn!(query = %query, source = %tag, error = %err, "Stage failed");
                    failures.push(err);
                }
            }
        }

        if let Some(record) = cached {
            warn!(
                key = %key,
                source = %record.source,
                age_secs = record.age_at(now).num_seconds(),
                "All sources failed, serving stale cache"
            );
            return LookupOutcome::Found {
                source: record.source,
                entries: record.entries,
                provenance: Provenance::StaleCache,
            };
        }

        warn!(query = %query, failures = failures.len(), "Dictionary unavailable");
        LookupOutcome::Unavailable { failures }
    }

    /// One bounded upstream call followed by normalization.
    ///
    /// Only entries with at least one gloss are returned.
    async fn run_stage(
        &self,
        source: &dyn DictionarySource,
        query: &Query,
    ) -> Result<Vec<Entry>, UpstreamError> {
        let tag = source.source();
        debug!(query = %query, source = %tag, "Trying source");

        let raw = tokio::time::timeout(self.settings.stage_timeout, source.fetch(query))
            .await
            .map_err(|_| UpstreamError::timeout(tag))??;

        let entries = normalize(tag, &raw, query, &self.settings.limits)?;
        Ok(entries.into_iter().filter(Entry::has_glosses).collect())
    }
}
