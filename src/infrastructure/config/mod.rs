//! Configuration loading and validation.
//!
//! Every section has serde defaults, so an empty file describes the stock
//! deployment: Jotoba first, then the two kanjiapi.dev sources, a 4 s bound
//! per upstream call and a ten-minute freshness window.

mod cache;
mod logging;
mod lookup;
mod server;
mod upstream;

use std::collections::HashSet;
use std::path::Path;
use std::time::Duration as StdDuration;

use chrono::Duration;
use serde::Deserialize;

pub use cache::CacheConfig;
pub use logging::LoggingConfig;
pub use lookup::LookupConfig;
pub use server::ServerConfig;
pub use upstream::UpstreamConfig;

use crate::adapter::inbound::http::ResponsePolicy;
use crate::application::lookup::LookupSettings;
use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub lookup: LookupConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Parse configuration from TOML content.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate semantic constraints that serde cannot express.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        if self.upstream.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "upstream.timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        for (field, value) in [
            ("upstream.jotoba_url", &self.upstream.jotoba_url),
            ("upstream.kanjiapi_url", &self.upstream.kanjiapi_url),
            ("upstream.handwriting_url", &self.upstream.handwriting_url),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::MissingField { field }.into());
            }
        }

        if self.lookup.sources.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "lookup.sources",
                reason: "at least one dictionary source is required".to_string(),
            }
            .into());
        }

        let mut seen = HashSet::new();
        for source in &self.lookup.sources {
            if !source.is_dictionary() {
                return Err(ConfigError::InvalidValue {
                    field: "lookup.sources",
                    reason: format!("{source} is not a dictionary source"),
                }
                .into());
            }
            if !seen.insert(*source) {
                return Err(ConfigError::InvalidValue {
                    field: "lookup.sources",
                    reason: format!("{source} is listed more than once"),
                }
                .into());
            }
        }

        if self.lookup.max_kanji_words == 0 {
            return Err(ConfigError::InvalidValue {
                field: "lookup.max_kanji_words",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        if self.cache.fresh_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "cache.fresh_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        if self.cache.max_stale_secs < self.cache.fresh_secs {
            return Err(ConfigError::InvalidValue {
                field: "cache.max_stale_secs",
                reason: "must not be shorter than cache.fresh_secs".to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Initialize logging, optionally overriding the configured level.
    pub fn init_logging(&self, level_override: Option<&str>) {
        match level_override {
            Some(level) => LoggingConfig {
                level: level.to_string(),
                ..self.logging.clone()
            }
            .init(),
            None => self.logging.init(),
        }
    }

    /// Bound on each upstream call.
    #[must_use]
    pub fn upstream_timeout(&self) -> StdDuration {
        StdDuration::from_millis(self.upstream.timeout_ms)
    }

    #[must_use]
    pub fn connect_timeout(&self) -> StdDuration {
        StdDuration::from_millis(self.upstream.connect_timeout_ms)
    }

    /// Settings for the lookup orchestrator.
    #[must_use]
    pub fn lookup_settings(&self) -> LookupSettings {
        LookupSettings {
            stage_timeout: self.upstream_timeout(),
            fresh_for: Duration::seconds(i64::from(self.cache.fresh_secs)),
            detail_fresh_for: Duration::seconds(i64::from(self.cache.detail_fresh_secs)),
            max_stale: Duration::seconds(i64::from(self.cache.max_stale_secs)),
            limits: self.lookup.limits(),
        }
    }

    /// `Cache-Control` policy for dictionary responses.
    #[must_use]
    pub fn response_policy(&self) -> ResponsePolicy {
        ResponsePolicy {
            fresh_max_age_secs: self.cache.fresh_secs,
            detail_fresh_max_age_secs: self.cache.detail_fresh_secs,
            stale_max_age_secs: self.cache.stale_max_age_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Source;
    use crate::error::Error;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::parse_toml("").unwrap();

        assert_eq!(config.server.port, 8787);
        assert_eq!(config.upstream.timeout_ms, 4000);
        assert_eq!(
            config.lookup.sources,
            vec![Source::Jotoba, Source::KanjiWords, Source::KanjiDetail]
        );
        assert_eq!(config.cache.fresh_secs, 600);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn lookup_settings_follow_cache_section() {
        let config = Config::parse_toml(
            r#"
[upstream]
timeout_ms = 1500

[cache]
fresh_secs = 120
detail_fresh_secs = 30
max_stale_secs = 3600
"#,
        )
        .unwrap();

        let settings = config.lookup_settings();
        assert_eq!(settings.stage_timeout, StdDuration::from_millis(1500));
        assert_eq!(settings.fresh_for, Duration::seconds(120));
        assert_eq!(settings.detail_fresh_for, Duration::seconds(30));
        assert_eq!(settings.max_stale, Duration::hours(1));
        assert_eq!(config.response_policy().fresh_max_age_secs, 120);
        assert_eq!(config.response_policy().detail_fresh_max_age_secs, 30);
    }

    #[test]
    fn rejects_zero_timeout() {
        let err = Config::parse_toml("[upstream]\ntimeout_ms = 0\n").unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidValue {
                field: "upstream.timeout_ms",
                ..
            })
        ));
    }

    #[test]
    fn rejects_duplicate_sources() {
        let err = Config::parse_toml("[lookup]\nsources = [\"jotoba\", \"jotoba\"]\n").unwrap_err();
        assert!(err.to_string().contains("listed more than once"));
    }

    #[test]
    fn rejects_handwriting_as_dictionary_source() {
        let err = Config::parse_toml("[lookup]\nsources = [\"google-handwriting\"]\n").unwrap_err();
        assert!(err.to_string().contains("not a dictionary source"));
    }

    #[test]
    fn rejects_unknown_source_tag() {
        let err = Config::parse_toml("[lookup]\nsources = [\"jisho\"]\n").unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::Parse(_))));
    }

    #[test]
    fn rejects_blank_upstream_url() {
        let err = Config::parse_toml("[upstream]\njotoba_url = \" \"\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "missing required field: upstream.jotoba_url"
        );
    }
}
