//! CLI argument parsing with clap derive

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use crate::app::{AppContext, AppFlags};
use crate::commands;
use crate::infra::config::YamlConfigStore;

/// Provision Unity Hub on a CI build agent and probe its headless CLI
#[derive(Parser)]
#[command(
    name = "hub-provision",
    version,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Config file (default: ~/.hub-provision/config.yaml)
    #[arg(long, global = true, env = "HUB_PROVISION_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Download, silently install, then probe the Hub
    Run(commands::run::RunArgs),

    /// Download the Hub installer into the working directory
    Download(commands::download::DownloadArgs),

    /// Launch the downloaded installer silently
    Install(commands::install::InstallArgs),

    /// Run the Hub's headless help and stream its output
    Probe(commands::probe::ProbeArgs),

    /// Install a Unity editor through the Hub CLI
    Editor(commands::editor::EditorArgs),

    /// Inspect configuration
    #[command(subcommand)]
    Config(commands::config::ConfigCommand),

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self) -> Result<ExitCode> {
        let Cli {
            config,
            quiet,
            no_color,
            command,
            ..
        } = self;

        let app = || {
            AppContext::new(AppFlags {
                config: config.clone(),
                no_color,
                quiet,
            })
        };

        match command {
            Command::Version => {
                commands::version::run();
                Ok(ExitCode::SUCCESS)
            }
            Command::Config(cmd) => {
                commands::config::run(&YamlConfigStore::new(config.clone()), &cmd)
            }
            Command::Run(args) => commands::run::run(&args, &app()?).await,
            Command::Download(args) => commands::download::run(args, &app()?).await,
            Command::Install(args) => commands::install::run(&args, &app()?).await,
            Command::Probe(args) => commands::probe::run(args, &app()?).await,
            Command::Editor(args) => commands::editor::run(args, &app()?).await,
        }
    }
}
