//! Handwriting recognizer factory.

use std::sync::Arc;

use reqwest::Client as HttpClient;

use crate::adapter::outbound::google_handwriting::GoogleHandwriting;
use crate::application::handwrite::HandwriteService;
use crate::infrastructure::config::Config;

#[must_use]
pub fn build_handwrite_service(config: &Config, http: &HttpClient) -> HandwriteService {
    let recognizer = GoogleHandwriting::new(http.clone(), config.upstream.handwriting_url.clone());
    HandwriteService::new(Arc::new(recognizer), config.upstream_timeout())
}
