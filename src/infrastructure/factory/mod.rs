//! Factory modules for building infrastructure components.
//!
//! Provides factory functions that construct fully-configured components
//! from application configuration and wire them into the HTTP state.
//!
//! # Submodules
//!
//! - [`dictionary`] - Dictionary sources and the lookup orchestrator
//! - [`handwriting`] - Recognizer client and handwriting service

pub mod dictionary;
pub mod handwriting;

use std::sync::Arc;

use reqwest::Client as HttpClient;

use crate::adapter::inbound::http::AppState;
use crate::adapter::outbound::cache::MemoryCache;
use crate::adapter::outbound::http::build_client;
use crate::error::Result;
use crate::infrastructure::config::Config;

/// Build the shared upstream HTTP client.
#[must_use]
pub fn build_http_client(config: &Config) -> HttpClient {
    build_client(
        config.upstream_timeout(),
        config.connect_timeout(),
        &config.upstream.user_agent,
    )
}

/// Build the complete handler state for the HTTP server.
///
/// # Errors
///
/// Returns an error if an upstream endpoint cannot be parsed.
#[allow(clippy::result_large_err)]
pub fn build_app_state(config: &Config) -> Result<AppState> {
    let http = build_http_client(config);
    let cache = Arc::new(MemoryCache::new());
    let lookup = dictionary::build_lookup_service(config, &http, cache)?;
    let handwrite = handwriting::build_handwrite_service(config, &http);

    Ok(AppState {
        lookup: Arc::new(lookup),
        handwrite: Arc::new(handwrite),
        policy: config.response_policy(),
    })
}
