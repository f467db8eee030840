//! Dictionary source factory.

use std::sync::Arc;

use reqwest::Client as HttpClient;
use tracing::info;

use crate::adapter::outbound::jotoba::JotobaClient;
use crate::adapter::outbound::kanjiapi::{KanjiDetail, KanjiWords, KanjiapiClient};
use crate::application::lookup::LookupService;
use crate::domain::Source;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::Config;
use crate::port::outbound::cache::CacheStore;
use crate::port::outbound::dictionary::DictionarySource;

/// Build the configured sources in priority order.
///
/// Both kanjiapi.dev sources share one client.
///
/// # Errors
///
/// Returns an error if the kanjiapi base URL is invalid or a non-dictionary
/// source is listed.
#[allow(clippy::result_large_err)]
pub fn build_sources(
    config: &Config,
    http: &HttpClient,
) -> Result<Vec<Arc<dyn DictionarySource>>> {
    let mut kanjiapi: Option<Arc<KanjiapiClient>> = None;
    let mut kanjiapi_client = || -> Result<Arc<KanjiapiClient>> {
        if let Some(client) = &kanjiapi {
            return Ok(Arc::clone(client));
        }
        let client = Arc::new(KanjiapiClient::new(
            http.clone(),
            &config.upstream.kanjiapi_url,
        )?);
        kanjiapi = Some(Arc::clone(&client));
        Ok(client)
    };

    let mut sources: Vec<Arc<dyn DictionarySource>> =
        Vec::with_capacity(config.lookup.sources.len());
    for source in &config.lookup.sources {
        let built: Arc<dyn DictionarySource> = match source {
            Source::Jotoba => Arc::new(JotobaClient::new(
                http.clone(),
                config.upstream.jotoba_url.clone(),
            )),
            Source::KanjiWords => Arc::new(KanjiWords(kanjiapi_client()?)),
            Source::KanjiDetail => Arc::new(KanjiDetail(kanjiapi_client()?)),
            Source::Handwriting => {
                return Err(ConfigError::InvalidValue {
                    field: "lookup.sources",
                    reason: format!("{source} is not a dictionary source"),
                }
                .into());
            }
        };
        sources.push(built);
    }

    Ok(sources)
}

/// Build the lookup orchestrator over the configured sources.
///
/// # Errors
///
/// See [`build_sources`].
#[allow(clippy::result_large_err)]
pub fn build_lookup_service(
    config: &Config,
    http: &HttpClient,
    cache: Arc<dyn CacheStore>,
) -> Result<LookupService> {
    let sources = build_sources(config, http)?;
    let service = LookupService::new(sources, cache, config.lookup_settings());

    info!(
        sources = ?service.source_order(),
        timeout_ms = config.upstream.timeout_ms,
        "Lookup chain configured"
    );
    Ok(service)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sources_follow_configured_order() {
        let config = Config::parse_toml(
            "[lookup]\nsources = [\"kanjiapi-detail\", \"jotoba\", \"kanjiapi\"]\n",
        )
        .unwrap();

        let sources = build_sources(&config, &HttpClient::new()).unwrap();
        let order: Vec<Source> = sources.iter().map(|s| s.source()).collect();

        assert_eq!(
            order,
            vec![Source::KanjiDetail, Source::Jotoba, Source::KanjiWords]
        );
    }

    #[test]
    fn invalid_kanjiapi_url_is_rejected() {
        let mut config = Config::default();
        config.upstream.kanjiapi_url = "not a url".into();

        assert!(build_sources(&config, &HttpClient::new()).is_err());
    }

    #[test]
    fn jotoba_only_chain_skips_kanjiapi_client() {
        let mut config = Config::default();
        config.upstream.kanjiapi_url = "not a url".into();
        config.lookup.sources = vec![Source::Jotoba];

        let sources = build_sources(&config, &HttpClient::new()).unwrap();
        assert_eq!(sources.len(), 1);
    }
}
