//! `hub-provision install` — launch the downloaded installer silently.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::install::{InstallOutcome, launch_installer};

/// Arguments for the install command.
#[derive(Args, Default)]
pub struct InstallArgs {
    /// Wait for the installer to exit and report its exit code
    #[arg(long)]
    pub wait: bool,
}

/// Run `hub-provision install`.
///
/// # Errors
///
/// Returns an error if the installer file is missing or cannot be spawned.
pub async fn run(args: &InstallArgs, app: &AppContext) -> Result<ExitCode> {
    let reporter = app.terminal_reporter();
    let wait = args.wait || app.config.installer.wait;
    let outcome = launch_installer(
        &app.runner,
        &app.fs,
        &reporter,
        &app.config.installer,
        &app.work_dir,
        wait,
    )
    .await?;

    match outcome {
        InstallOutcome::Started { pid } => {
            if let Some(pid) = pid {
                app.output.kv("PID", &pid.to_string());
            }
            Ok(ExitCode::SUCCESS)
        }
        InstallOutcome::Finished { code: Some(0) } => Ok(ExitCode::SUCCESS),
        InstallOutcome::Finished { code } => Ok(code
            .and_then(|c| u8::try_from(c).ok())
            .map_or(ExitCode::FAILURE, ExitCode::from)),
    }
}
