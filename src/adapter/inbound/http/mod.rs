//! HTTP surface of the proxy.
//!
//! | Route                         | Behavior                                      |
//! |-------------------------------|-----------------------------------------------|
//! | `GET /?keyword=`              | Dictionary lookup through the fallback chain  |
//! | `POST /handwrite`             | Ink proxied to the recognizer, reply verbatim |
//! | `POST /handwrite/candidates`  | Ink recognized, candidates extracted          |
//! | `OPTIONS *`                   | CORS preflight                                |

mod cors;
pub mod dictionary;
mod handwrite;
pub mod response;

use std::future::Future;
use std::sync::Arc;

use axum::middleware;
use axum::routing::{any, post};
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::application::handwrite::HandwriteService;
use crate::application::lookup::LookupService;
use crate::domain::Source;
use crate::error::Result;
use response::CachePolicy;

/// `Cache-Control` max-ages for successful dictionary responses.
///
/// Fresh responses live as long as the cache record backing them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponsePolicy {
    pub fresh_max_age_secs: u32,
    pub detail_fresh_max_age_secs: u32,
    pub stale_max_age_secs: u32,
}

impl Default for ResponsePolicy {
    fn default() -> Self {
        Self {
            fresh_max_age_secs: 600,
            detail_fresh_max_age_secs: 300,
            stale_max_age_secs: 60,
        }
    }
}

impl ResponsePolicy {
    fn fresh(self, source: Source) -> CachePolicy {
        let max_age = match source {
            Source::KanjiDetail => self.detail_fresh_max_age_secs,
            _ => self.fresh_max_age_secs,
        };
        CachePolicy::Public { max_age }
    }

    fn stale(self) -> CachePolicy {
        CachePolicy::Public {
            max_age: self.stale_max_age_secs,
        }
    }
}

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub lookup: Arc<LookupService>,
    pub handwrite: Arc<HandwriteService>,
    pub policy: ResponsePolicy,
}

/// Build the proxy router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", any(dictionary::search))
        .route(
            "/handwrite",
            post(handwrite::proxy).fallback(handwrite::use_post),
        )
        .route(
            "/handwrite/candidates",
            post(handwrite::candidates).fallback(handwrite::use_post),
        )
        .fallback(dictionary::search)
        .layer(middleware::from_fn(cors::cors))
        .with_state(state)
}

/// Serve until `shutdown` resolves.
///
/// # Errors
///
/// Returns an error if the server fails while accepting connections.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        info!(addr = %addr, "minireader listening");
    }
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}
