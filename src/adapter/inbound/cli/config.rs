//! Handler for the `config` command group.

use std::path::Path;

use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::config::Config;

/// Execute `config validate`.
pub fn execute_validate(path: &Path) -> Result<()> {
    output::section("Config Validation");
    output::field("Path", path.display());
    let config = Config::load(path)?;
    output::success("Config file is valid");

    output::section("Lookup Chain");
    let order: Vec<String> = config
        .lookup
        .sources
        .iter()
        .map(ToString::to_string)
        .collect();
    output::field("Sources", order.join(" -> "));
    output::field("Timeout", format!("{}ms", config.upstream.timeout_ms));
    output::field("Fresh", format!("{}s", config.cache.fresh_secs));
    output::field("Listen", config.server.bind_addr());

    Ok(())
}
