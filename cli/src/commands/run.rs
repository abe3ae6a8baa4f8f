//! `hub-provision run` — download, install and probe in one go.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::install::InstallOutcome;
use crate::application::services::provision::{self as service, ProvisionOptions};
use crate::output::ConsoleLines;

/// Arguments for the run command.
#[derive(Args, Default)]
pub struct RunArgs {
    /// Wait for the installer to exit before probing the Hub
    #[arg(long)]
    pub wait_install: bool,

    /// Reuse the installer already in the working directory
    #[arg(long)]
    pub skip_download: bool,
}

/// Run `hub-provision run`.
///
/// A non-zero exit from the Hub probe is reported but does not fail the run.
///
/// # Errors
///
/// Returns an error if the download, the installer launch, or the probe
/// spawn fails.
pub async fn run(args: &RunArgs, app: &AppContext) -> Result<ExitCode> {
    app.output.header("Unity Hub provisioning");
    let reporter = app.terminal_reporter();
    let opts = ProvisionOptions {
        skip_download: args.skip_download,
        wait_install: args.wait_install,
    };

    let outcome = service::provision(
        &app.downloader,
        &app.runner,
        &app.fs,
        &reporter,
        &ConsoleLines,
        &app.config,
        &app.work_dir,
        opts,
    )
    .await?;

    let ctx = &app.output;
    if let Some(fetch) = &outcome.fetch {
        ctx.kv("Installer", &fetch.path.display().to_string());
        ctx.kv("Size", &format!("{} bytes", fetch.report.bytes));
        ctx.kv("SHA-256", &fetch.report.sha256);
    }
    if let InstallOutcome::Started { .. } = outcome.install {
        ctx.info("The installer may still be running.");
    }
    Ok(ExitCode::SUCCESS)
}
