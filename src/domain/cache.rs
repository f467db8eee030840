//! Cache keys and records for normalized dictionary results.

use std::fmt;

use chrono::{DateTime, Duration, Utc};

use super::entry::Entry;
use super::query::Query;
use super::source::Source;

/// Proxy route a cached result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// `GET /?keyword=`
    Dictionary,
}

impl Route {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dictionary => "dictionary",
        }
    }
}

/// Deterministic key derived from a route and a normalized query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    route: Route,
    query: String,
}

impl CacheKey {
    #[must_use]
    pub fn new(route: Route, query: &Query) -> Self {
        Self {
            route,
            query: query.normalized_key(),
        }
    }

    /// Key for a dictionary lookup.
    #[must_use]
    pub fn dictionary(query: &Query) -> Self {
        Self::new(Route::Dictionary, query)
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.route.as_str(), self.query)
    }
}

/// A stored lookup result.
///
/// Fresh while younger than `fresh_for`; afterwards it may still be served
/// as stale data when every upstream fails.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheRecord {
    pub entries: Vec<Entry>,
    pub source: Source,
    pub inserted_at: DateTime<Utc>,
    pub fresh_for: Duration,
}

impl CacheRecord {
    /// Record stamped with the current time.
    #[must_use]
    pub fn new(entries: Vec<Entry>, source: Source, fresh_for: Duration) -> Self {
        Self::at(entries, source, fresh_for, Utc::now())
    }

    /// Record stamped with an explicit insertion time.
    #[must_use]
    pub fn at(
        entries: Vec<Entry>,
        source: Source,
        fresh_for: Duration,
        inserted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            entries,
            source,
            inserted_at,
            fresh_for,
        }
    }

    #[must_use]
    pub fn age_at(&self, now: DateTime<Utc>) -> Duration {
        now - self.inserted_at
    }

    #[must_use]
    pub fn is_fresh_at(&self, now: DateTime<Utc>) -> bool {
        self.age_at(now) < self.fresh_for
    }
}
