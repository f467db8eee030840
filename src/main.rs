use std::path::Path;

use clap::Parser;
use tracing::{error, info, warn};

use minireader::adapter::inbound::cli::command::{Cli, Commands, ConfigCommand};
use minireader::adapter::inbound::cli::{config as config_cmd, lookup, output, serve};
use minireader::error::Result;
use minireader::infrastructure::config::Config;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Config(ConfigCommand::Validate) => config_cmd::execute_validate(&cli.config),
        Commands::Serve(args) => match load(&cli) {
            Ok(config) => {
                info!("minireader starting");
                serve::execute(config, args).await
            }
            Err(e) => Err(e),
        },
        Commands::Lookup(args) => match load(&cli) {
            Ok(config) => lookup::execute(&config, &args.keyword).await,
            Err(e) => Err(e),
        },
    };

    if let Err(e) = result {
        error!(error = %e, "Command failed");
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

/// Load the configuration and initialize logging.
///
/// A missing file means stock defaults.
fn load(cli: &Cli) -> Result<Config> {
    let path: &Path = &cli.config;
    let exists = path.exists();
    let config = if exists {
        Config::load(path)?
    } else {
        Config::default()
    };

    config.init_logging(cli.log_level.as_deref());
    if !exists {
        warn!(path = %path.display(), "Config file not found, using defaults");
    }
    Ok(config)
}
