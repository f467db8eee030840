//! Handler for the `serve` command.

use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

use super::command::ServeArgs;
use crate::adapter::inbound::http;
use crate::error::Result;
use crate::infrastructure::config::Config;
use crate::infrastructure::factory::build_app_state;

/// Execute `serve`: bind the listener and run until Ctrl-C.
pub async fn execute(mut config: Config, args: &ServeArgs) -> Result<()> {
    if let Some(host) = &args.host {
        config.server.host.clone_from(host);
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let state = build_app_state(&config)?;
    let listener = TcpListener::bind(config.server.bind_addr()).await?;

    http::serve(listener, state, shutdown_signal()).await?;
    info!("minireader stopped");
    Ok(())
}

async fn shutdown_signal() {
    if signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
