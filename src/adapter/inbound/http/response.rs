//! JSON response builders and wire error payloads.

use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::json;
use tracing::error;

use crate::domain::Source;
use crate::error::{HandwriteError, InkError};

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Provenance header set on cache-served responses.
pub const X_SERVED_FROM: &str = "x-served-from";

/// `Cache-Control` policy for a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    Public { max_age: u32 },
    NoStore,
}

impl CachePolicy {
    #[must_use]
    pub fn header_value(self) -> String {
        match self {
            Self::Public { max_age } => format!("public, max-age={max_age}"),
            Self::NoStore => "no-store".into(),
        }
    }
}

/// Response metadata for successful lookups.
#[derive(Debug, Serialize)]
pub struct Meta {
    pub status: u16,
    pub source: Source,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub served_from: Option<&'static str>,
}

/// `{"meta": ..., "data": ...}` envelope of successful responses.
#[derive(Debug, Serialize)]
pub struct SuccessBody<T> {
    pub meta: Meta,
    pub data: T,
}

/// A JSON body that is already serialized.
#[must_use]
pub fn raw_json(
    status: StatusCode,
    body: impl Into<axum::body::Body>,
    cache: CachePolicy,
) -> Response {
    (
        status,
        [
            (CONTENT_TYPE, JSON_CONTENT_TYPE.to_string()),
            (CACHE_CONTROL, cache.header_value()),
        ],
        body.into(),
    )
        .into_response()
}

/// Serialize `body` and wrap it with the standard JSON headers.
#[must_use]
pub fn json_response<T: Serialize>(status: StatusCode, body: &T, cache: CachePolicy) -> Response {
    match serde_json::to_vec(body) {
        Ok(bytes) => raw_json(status, bytes, cache),
        Err(err) => {
            error!(error = %err, "Failed to serialize response body");
            raw_json(
                StatusCode::INTERNAL_SERVER_ERROR,
                r#"{"error":"INTERNAL"}"#,
                CachePolicy::NoStore,
            )
        }
    }
}

/// Mark a response with the cache it was served from.
pub fn served_from(response: &mut Response, origin: &'static str) {
    response
        .headers_mut()
        .insert(HeaderName::from_static(X_SERVED_FROM), HeaderValue::from_static(origin));
}

/// Errors surfaced to HTTP clients. All carry `Cache-Control: no-store`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Empty or absent `keyword`.
    MissingKeyword,
    /// Handwriting body is not a parsable ink payload.
    BadRequestBody(String),
    /// Ink had nothing to recognize.
    NoInk(String),
    /// Every dictionary stage failed and nothing was cached.
    DictionaryUnavailable(String),
    /// The recognizer could not be reached.
    HandwriteFailed(String),
    /// Wrong method on a POST-only route.
    MethodNotAllowed,
}

impl ApiError {
    /// Machine-readable kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::MissingKeyword => "INVALID_REQUEST",
            Self::BadRequestBody(_) => "BAD_REQUEST_BODY",
            Self::NoInk(_) => "NO_INK",
            Self::DictionaryUnavailable(_) => "DICTIONARY_UNAVAILABLE",
            Self::HandwriteFailed(_) => "HANDWRITE_FAILED",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
        }
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::MissingKeyword | Self::BadRequestBody(_) | Self::NoInk(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::DictionaryUnavailable(_) | Self::HandwriteFailed(_) => StatusCode::BAD_GATEWAY,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    fn body(&self) -> serde_json::Value {
        match self {
            Self::MissingKeyword => json!({ "error": "Missing keyword" }),
            Self::MethodNotAllowed => json!({ "error": "Use POST" }),
            Self::DictionaryUnavailable(detail) => {
                json!({ "error": self.kind(), "detail": detail, "data": [] })
            }
            Self::BadRequestBody(detail) | Self::NoInk(detail) | Self::HandwriteFailed(detail) => {
                json!({ "error": self.kind(), "detail": detail })
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        json_response(self.status(), &self.body(), CachePolicy::NoStore)
    }
}

impl From<HandwriteError> for ApiError {
    fn from(err: HandwriteError) -> Self {
        match err {
            HandwriteError::Ink(InkError::NoUsableStrokes | InkError::MissingRequest) => {
                Self::NoInk("Draw a kanji first".into())
            }
            HandwriteError::Ink(ink) => Self::BadRequestBody(ink.to_string()),
            HandwriteError::Upstream(upstream) => Self::HandwriteFailed(upstream.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{UpstreamCause, UpstreamError};

    #[test]
    fn cache_policy_header_values() {
        assert_eq!(
            CachePolicy::Public { max_age: 600 }.header_value(),
            "public, max-age=600"
        );
        assert_eq!(CachePolicy::NoStore.header_value(), "no-store");
    }

    #[test]
    fn dictionary_failure_body_has_empty_data() {
        let err = ApiError::DictionaryUnavailable("All upstream APIs failed".into());
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            err.body(),
            json!({"error": "DICTIONARY_UNAVAILABLE", "detail": "All upstream APIs failed", "data": []})
        );
    }

    #[test]
    fn handwrite_errors_map_to_wire_kinds() {
        let no_ink: ApiError = HandwriteError::Ink(InkError::NoUsableStrokes).into();
        assert_eq!(no_ink.kind(), "NO_INK");
        assert_eq!(no_ink.status(), StatusCode::BAD_REQUEST);

        let bad: ApiError = HandwriteError::Ink(InkError::Unparsable("eof".into())).into();
        assert_eq!(bad.kind(), "BAD_REQUEST_BODY");

        let failed: ApiError = HandwriteError::Upstream(UpstreamError::new(
            Source::Handwriting,
            UpstreamCause::Timeout,
        ))
        .into();
        assert_eq!(failed.kind(), "HANDWRITE_FAILED");
        assert_eq!(failed.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn meta_omits_served_from_when_absent() {
        let meta = Meta {
            status: 200,
            source: Source::Jotoba,
            served_from: None,
        };
        assert_eq!(
            serde_json::to_value(&meta).unwrap(),
            json!({"status": 200, "source": "jotoba"})
        );
    }
}
