//! `hub-provision probe` — run the Hub's headless help and stream its output.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::probe::probe_hub;
use crate::commands::exit_code_for;
use crate::output::ConsoleLines;

/// Arguments for the probe command.
#[derive(Args, Default)]
pub struct ProbeArgs {
    /// Kill the Hub if it has not exited after this many seconds
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Arguments passed to the Hub instead of the configured probe arguments
    #[arg(last = true, value_name = "HUB_ARGS")]
    pub hub_args: Vec<String>,
}

/// Run `hub-provision probe`.
///
/// Exits with the Hub's own exit code.
///
/// # Errors
///
/// Returns an error if the Hub is missing, cannot be spawned, or times out.
pub async fn run(args: ProbeArgs, app: &AppContext) -> Result<ExitCode> {
    let mut hub = app.config.hub.clone();
    if args.timeout.is_some() {
        hub.probe_timeout_secs = args.timeout;
    }
    if !args.hub_args.is_empty() {
        hub.probe_args = args.hub_args;
    }

    let reporter = app.terminal_reporter();
    let outcome = probe_hub(&app.runner, &app.fs, &reporter, &ConsoleLines, &hub).await?;
    Ok(exit_code_for(outcome.status))
}
