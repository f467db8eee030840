//! Result cache port.

use crate::domain::{CacheKey, CacheRecord};

/// Keyed store for normalized lookup results.
///
/// Reads may run concurrently; `put` is last-write-wins with no merge.
/// Expiry is decided by the caller comparing record age at read time.
pub trait CacheStore: Send + Sync {
    fn get(&self, key: &CacheKey) -> Option<CacheRecord>;

    fn put(&self, key: CacheKey, record: CacheRecord);
}
