//! `POST /handwrite` and `POST /handwrite/candidates`.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::response::{json_response, raw_json, ApiError, CachePolicy, Meta, SuccessBody};
use super::AppState;
use crate::domain::Source;

/// Forward the ink to the recognizer and relay its reply verbatim.
pub async fn proxy(State(state): State<AppState>, body: Bytes) -> Response {
    match state.handwrite.proxy(&body).await {
        Ok(reply) => {
            let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::BAD_GATEWAY);
            raw_json(status, reply.body, CachePolicy::NoStore)
        }
        Err(err) => ApiError::from(err).into_response(),
    }
}

/// Recognize the ink and return the candidate characters.
pub async fn candidates(State(state): State<AppState>, body: Bytes) -> Response {
    match state.handwrite.candidates(&body).await {
        Ok(candidates) => json_response(
            StatusCode::OK,
            &SuccessBody {
                meta: Meta {
                    status: 200,
                    source: Source::Handwriting,
                    served_from: None,
                },
                data: &candidates,
            },
            CachePolicy::NoStore,
        ),
        Err(err) => ApiError::from(err).into_response(),
    }
}

/// Anything but POST on the handwriting routes.
pub async fn use_post() -> Response {
    ApiError::MethodNotAllowed.into_response()
}
