//! In-process result cache.

use dashmap::DashMap;

use crate::domain::{CacheKey, CacheRecord};
use crate::port::outbound::cache::CacheStore;

/// Concurrent map-backed [`CacheStore`].
///
/// Nothing is ever evicted; readers compare record age against their own
/// windows.
#[derive(Debug, Default)]
pub struct MemoryCache {
    records: DashMap<CacheKey, CacheRecord>,
}

impl MemoryCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl CacheStore for MemoryCache {
    fn get(&self, key: &CacheKey) -> Option<CacheRecord> {
        self.records.get(key).map(|record| record.clone())
    }

    fn put(&self, key: CacheKey, record: CacheRecord) {
        self.records.insert(key, record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Entry, Query, Source};
    use chrono::Duration;

    fn key(q: &str) -> CacheKey {
        CacheKey::dictionary(&Query::parse(q).unwrap())
    }

    fn record(gloss: &str, source: Source) -> CacheRecord {
        CacheRecord::new(
            vec![Entry::simple("猫", "ねこ", vec![gloss.to_string()])],
            source,
            Duration::seconds(600),
        )
    }

    #[test]
    fn get_returns_what_was_put() {
        let cache = MemoryCache::new();
        assert!(cache.get(&key("猫")).is_none());

        cache.put(key("猫"), record("cat", Source::Jotoba));
        assert_eq!(cache.get(&key(" 猫 ")).unwrap().source, Source::Jotoba);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn put_is_last_write_wins() {
        let cache = MemoryCache::new();
        cache.put(key("猫"), record("cat", Source::Jotoba));
        cache.put(key("猫"), record("feline", Source::KanjiWords));

        let stored = cache.get(&key("猫")).unwrap();
        assert_eq!(stored.source, Source::KanjiWords);
        assert_eq!(stored.entries[0].glosses().collect::<Vec<_>>(), vec!["feline"]);
        assert_eq!(cache.len(), 1);
    }
}
