//! Config command - inspect configuration.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::config::{Config, default_config_path};
use crate::output::JsonFormatter;
use crate::Cli;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    /// Config action.
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration.
    Show,

    /// Show the default configuration path.
    Path,
}

/// Runs the config command.
pub fn run(args: &ConfigArgs, cli: &Cli, config: &Config) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            println!("{}", JsonFormatter::new(true).format(config)?);
        }
        ConfigAction::Path => {
            let path = cli.config.clone().or_else(default_config_path);
            match path {
                Some(path) => println!("{}", path.display()),
                None => anyhow::bail!("No configuration directory on this platform"),
            }
        }
    }
    Ok(())
}
