//! `hub-provision config` — inspect the effective configuration.

use std::process::ExitCode;

use anyhow::Result;
use clap::Subcommand;

use crate::application::ports::ConfigStore;
use crate::application::services::config_service;

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration as YAML
    Show,
    /// Print the config file location
    Path,
}

/// Run the config command.
///
/// # Errors
///
/// Returns an error if the config location cannot be determined or the file
/// is invalid.
pub fn run(store: &impl ConfigStore, cmd: &ConfigCommand) -> Result<ExitCode> {
    match cmd {
        ConfigCommand::Show => {
            let config = config_service::load_config(store)?;
            print!("{}", config_service::render_config(&config)?);
        }
        ConfigCommand::Path => println!("{}", store.path()?.display()),
    }
    Ok(ExitCode::SUCCESS)
}
