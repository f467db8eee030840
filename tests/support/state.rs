//! App state assembled from scripted sources.

use std::sync::Arc;
use std::time::Duration;

use minireader::adapter::inbound::http::{AppState, ResponsePolicy};
use minireader::adapter::outbound::cache::MemoryCache;
use minireader::application::handwrite::HandwriteService;
use minireader::application::lookup::{LookupService, LookupSettings};
use minireader::port::outbound::dictionary::DictionarySource;
use minireader::port::outbound::handwriting::HandwritingRecognizer;
use minireader::testkit::recognizer::ScriptedRecognizer;
use minireader::testkit::source::ScriptedSource;

pub fn settings() -> LookupSettings {
    LookupSettings {
        stage_timeout: Duration::from_millis(100),
        ..LookupSettings::default()
    }
}

pub fn lookup(sources: &[Arc<ScriptedSource>], cache: Arc<MemoryCache>) -> LookupService {
    let sources = sources
        .iter()
        .map(|s| Arc::clone(s) as Arc<dyn DictionarySource>)
        .collect();
    LookupService::new(sources, cache, settings())
}

pub fn app_state(
    sources: &[Arc<ScriptedSource>],
    cache: Arc<MemoryCache>,
    recognizer: Arc<ScriptedRecognizer>,
) -> AppState {
    AppState {
        lookup: Arc::new(lookup(sources, cache)),
        handwrite: Arc::new(HandwriteService::new(
            recognizer as Arc<dyn HandwritingRecognizer>,
            Duration::from_millis(100),
        )),
        policy: ResponsePolicy::default(),
    }
}
