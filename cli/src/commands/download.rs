//! `hub-provision download` — fetch the Hub installer only.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::fetch;

/// Arguments for the download command.
#[derive(Args, Default)]
pub struct DownloadArgs {
    /// Installer URL (overrides `installer.url`)
    #[arg(long)]
    pub url: Option<String>,

    /// File name to save as in the working directory (overrides `installer.file`)
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Run `hub-provision download`.
///
/// # Errors
///
/// Returns an error if the URL or file name is invalid or the download fails.
pub async fn run(args: DownloadArgs, app: &AppContext) -> Result<ExitCode> {
    let mut installer = app.config.installer.clone();
    if let Some(url) = args.url {
        installer.url = url;
    }
    if let Some(file) = args.output {
        installer.file = file;
    }

    let reporter = app.terminal_reporter();
    let outcome =
        fetch::fetch_installer(&app.downloader, &reporter, &installer, &app.work_dir).await?;

    let ctx = &app.output;
    ctx.kv("Installer", &outcome.path.display().to_string());
    ctx.kv("Size", &format!("{} bytes", outcome.report.bytes));
    ctx.kv("SHA-256", &outcome.report.sha256);
    Ok(ExitCode::SUCCESS)
}
