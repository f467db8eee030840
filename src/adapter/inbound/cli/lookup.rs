//! Handler for the `lookup` command.

use crate::adapter::inbound::http::dictionary::failure_detail;
use crate::adapter::inbound::http::response::{Meta, SuccessBody};
use crate::application::lookup::{LookupOutcome, Provenance};
use crate::error::{Error, Result};
use crate::infrastructure::config::Config;
use crate::infrastructure::factory::build_app_state;

/// Execute `lookup`: run the fallback chain once and print the response body.
pub async fn execute(config: &Config, keyword: &str) -> Result<()> {
    let state = build_app_state(config)?;

    match state.lookup.lookup(keyword).await {
        LookupOutcome::MissingKeyword => Err(Error::MissingKeyword),
        LookupOutcome::Unavailable { failures } => {
            Err(Error::DictionaryUnavailable(failure_detail(&failures)))
        }
        LookupOutcome::Found {
            source,
            entries,
            provenance,
        } => {
            let body = SuccessBody {
                meta: Meta {
                    status: 200,
                    source,
                    served_from: (provenance == Provenance::StaleCache).then_some("stale-cache"),
                },
                data: entries,
            };
            println!("{}", serde_json::to_string_pretty(&body)?);
            Ok(())
        }
    }
}
