use thiserror::Error;

use crate::domain::Source;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Why a single upstream call did not produce a response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UpstreamCause {
    #[error("timed out")]
    Timeout,

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("network error: {0}")]
    Network(String),

    #[error("malformed response: {0}")]
    Decode(String),
}

/// A failed call to one upstream source.
///
/// Timeouts, non-2xx statuses and transport failures are all treated the
/// same way by the lookup chain: the stage is abandoned and the next one runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{upstream} unavailable: {cause}")]
pub struct UpstreamError {
    pub upstream: Source,
    pub cause: UpstreamCause,
}

impl UpstreamError {
    #[must_use]
    pub fn new(upstream: Source, cause: UpstreamCause) -> Self {
        Self { upstream, cause }
    }

    #[must_use]
    pub fn timeout(upstream: Source) -> Self {
        Self::new(upstream, UpstreamCause::Timeout)
    }

    /// Classify a reqwest failure.
    #[must_use]
    pub fn from_reqwest(upstream: Source, err: &reqwest::Error) -> Self {
        let cause = if err.is_timeout() {
            UpstreamCause::Timeout
        } else if let Some(status) = err.status() {
            UpstreamCause::Status(status.as_u16())
        } else if err.is_decode() {
            UpstreamCause::Decode(err.to_string())
        } else {
            UpstreamCause::Network(err.to_string())
        };
        Self::new(upstream, cause)
    }
}

/// A raw upstream response that does not match its source's schema.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{upstream} response does not match its schema: {reason}")]
pub struct NormalizeError {
    pub upstream: Source,
    pub reason: String,
}

impl NormalizeError {
    pub fn new(upstream: Source, reason: impl Into<String>) -> Self {
        Self {
            upstream,
            reason: reason.into(),
        }
    }
}

impl From<NormalizeError> for UpstreamError {
    fn from(err: NormalizeError) -> Self {
        Self::new(err.upstream, UpstreamCause::Decode(err.reason))
    }
}

/// Local handwriting payload validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InkError {
    #[error("request body is not a valid ink payload: {0}")]
    Unparsable(String),

    #[error("malformed stroke: {0}")]
    MalformedStroke(String),

    #[error("payload contains no recognition request")]
    MissingRequest,

    #[error("draw a kanji first: every stroke has fewer than 2 points")]
    NoUsableStrokes,
}

/// Failures of the handwriting routes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HandwriteError {
    #[error(transparent)]
    Ink(#[from] InkError),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    #[error("missing keyword")]
    MissingKeyword,

    #[error("dictionary unavailable: {0}")]
    DictionaryUnavailable(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_error_display_names_source() {
        let err = UpstreamError::new(Source::Jotoba, UpstreamCause::Status(503));
        assert_eq!(err.to_string(), "jotoba unavailable: unexpected status 503");
    }

    #[test]
    fn normalize_error_becomes_decode_failure() {
        let err: UpstreamError = NormalizeError::new(Source::KanjiWords, "expected array").into();
        assert_eq!(err.upstream, Source::KanjiWords);
        assert_eq!(err.cause, UpstreamCause::Decode("expected array".into()));
    }

    #[test]
    fn config_error_wraps_into_crate_error() {
        let err: Error = ConfigError::MissingField { field: "jotoba_url" }.into();
        assert_eq!(err.to_string(), "missing required field: jotoba_url");
    }
}
