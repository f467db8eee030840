//! `GET /?keyword=` - dictionary lookup.

use axum::extract::{Query as QueryParams, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::response::{json_response, served_from, ApiError, Meta, SuccessBody};
use super::AppState;
use crate::application::lookup::{LookupOutcome, Provenance};
use crate::domain::{Entry, Source};
use crate::error::UpstreamError;

/// Dictionary search handler; also serves as the router fallback so any
/// path other than the handwriting routes behaves like `/`.
///
/// A repeated `keyword` parameter resolves to its first occurrence.
pub async fn search(
    State(state): State<AppState>,
    params: Option<QueryParams<Vec<(String, String)>>>,
) -> Response {
    let keyword = params
        .and_then(|QueryParams(pairs)| first_keyword(pairs))
        .unwrap_or_default();

    match state.lookup.lookup(&keyword).await {
        LookupOutcome::MissingKeyword => ApiError::MissingKeyword.into_response(),
        LookupOutcome::Found {
            source,
            entries,
            provenance,
        } => found(&state, source, &entries, provenance),
        LookupOutcome::Unavailable { failures } => {
            ApiError::DictionaryUnavailable(failure_detail(&failures)).into_response()
        }
    }
}

fn first_keyword(pairs: Vec<(String, String)>) -> Option<String> {
    pairs
        .into_iter()
        .find_map(|(name, value)| (name == "keyword").then_some(value))
}

fn found(state: &AppState, source: Source, entries: &[Entry], provenance: Provenance) -> Response {
    let (cache, origin) = match provenance {
        Provenance::Upstream => (state.policy.fresh(source), None),
        Provenance::FreshCache => (state.policy.fresh(source), Some("cache")),
        Provenance::StaleCache => (state.policy.stale(), Some("stale-cache")),
    };
    let body = SuccessBody {
        meta: Meta {
            status: 200,
            source,
            served_from: (provenance == Provenance::StaleCache).then_some("stale-cache"),
        },
        data: entries,
    };

    let mut response = json_response(StatusCode::OK, &body, cache);
    if let Some(origin) = origin {
        served_from(&mut response, origin);
    }
    response
}

/// `detail` text of the 502 response.
#[must_use]
pub fn failure_detail(failures: &[UpstreamError]) -> String {
    if failures.is_empty() {
        return "All upstream APIs failed".into();
    }
    let causes: Vec<String> = failures.iter().map(ToString::to_string).collect();
    format!("All upstream APIs failed: {}", causes.join("; "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UpstreamCause;

    #[test]
    fn failure_detail_lists_each_stage() {
        let failures = vec![
            UpstreamError::new(Source::Jotoba, UpstreamCause::Timeout),
            UpstreamError::new(Source::KanjiWords, UpstreamCause::Status(503)),
        ];
        assert_eq!(
            failure_detail(&failures),
            "All upstream APIs failed: jotoba unavailable: timed out; \
             kanjiapi unavailable: unexpected status 503"
        );
        assert_eq!(failure_detail(&[]), "All upstream APIs failed");
    }

    #[test]
    fn first_keyword_skips_other_parameters() {
        let pairs = vec![
            ("lang".to_string(), "en".to_string()),
            ("keyword".to_string(), "猫".to_string()),
            ("keyword".to_string(), "cat".to_string()),
        ];
        assert_eq!(first_keyword(pairs).as_deref(), Some("猫"));
        assert_eq!(first_keyword(Vec::new()), None);
    }
}
