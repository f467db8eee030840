//! Command-line interface definitions.
//!
//! Defines the CLI structure for minireader using `clap`: run the proxy,
//! perform a one-shot lookup, or validate a configuration file.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Japanese dictionary and handwriting proxy
#[derive(Parser, Debug)]
#[command(name = "minireader")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file.
    #[arg(short, long, global = true, default_value = "config.toml")]
    pub config: PathBuf,

    /// Override the configured log level (e.g. `debug`).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP proxy until interrupted
    Serve(ServeArgs),

    /// Look up one keyword through the fallback chain and print the JSON body
    Lookup(LookupArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `minireader config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Validate a configuration file for correctness.
    Validate,
}

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Override the configured listen host.
    #[arg(long)]
    pub host: Option<String>,

    /// Override the configured listen port.
    #[arg(long)]
    pub port: Option<u16>,
}

/// Arguments for the `lookup` subcommand.
#[derive(Args, Debug)]
pub struct LookupArgs {
    /// Word, reading or kanji to look up.
    pub keyword: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_serve_overrides() {
        let cli = Cli::parse_from(["minireader", "serve", "--port", "9000"]);
        let Commands::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(args.port, Some(9000));
        assert_eq!(args.host, None);
        assert_eq!(cli.config, PathBuf::from("config.toml"));
    }

    #[test]
    fn config_flag_is_global() {
        let cli = Cli::parse_from(["minireader", "lookup", "猫", "-c", "alt.toml"]);
        assert_eq!(cli.config, PathBuf::from("alt.toml"));
        let Commands::Lookup(args) = cli.command else {
            panic!("expected lookup");
        };
        assert_eq!(args.keyword, "猫");
    }

    #[test]
    fn config_validate_parses() {
        let cli = Cli::parse_from(["minireader", "config", "validate"]);
        assert!(matches!(cli.command, Commands::Config(ConfigCommand::Validate)));
    }
}
