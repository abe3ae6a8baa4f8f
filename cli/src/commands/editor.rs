//! `hub-provision editor` — install a Unity editor through the Hub CLI.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::editor::install_editor;
use crate::output::ConsoleLines;

/// Arguments for the editor command.
#[derive(Args, Default)]
pub struct EditorArgs {
    /// Editor version, e.g. 2019.4.28f1 (overrides `editor.version`)
    #[arg(long)]
    pub version: Option<String>,

    /// Module to add; repeatable (replaces `editor.modules`)
    #[arg(short = 'm', long = "module", value_name = "MODULE")]
    pub modules: Vec<String>,
}

/// Run `hub-provision editor`.
///
/// # Errors
///
/// Returns an error if no version is configured, the Hub is missing, or the
/// Hub reports a failed install.
pub async fn run(args: EditorArgs, app: &AppContext) -> Result<ExitCode> {
    let Some(version) = args.version.or_else(|| app.config.editor.version.clone()) else {
        anyhow::bail!("No editor version given.\n\nPass --version or set editor.version in the config.");
    };
    let modules = if args.modules.is_empty() {
        app.config.editor.modules.clone()
    } else {
        args.modules
    };

    let reporter = app.terminal_reporter();
    let outcome = install_editor(
        &app.runner,
        &app.fs,
        &reporter,
        &ConsoleLines,
        &app.config.hub,
        &version,
        &modules,
    )
    .await?;
    tracing::info!(lines = outcome.lines, "editor install finished");
    Ok(ExitCode::SUCCESS)
}
