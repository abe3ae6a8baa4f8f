//! Application service — editor install through the Hub CLI.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use anyhow::Result;

use crate::application::ports::{LineSink, LocalFs, ProcessRunner, ProgressReporter};
use crate::application::services::probe::{StreamOutcome, stream_hub};
use crate::domain::config::HubConfig;
use crate::domain::error::ProvisionError;
use crate::domain::hub::editor_install_args;

/// Install an editor `version` with `modules`, streaming the Hub's output.
///
/// Waits for the Hub to finish; the probe timeout does not apply since an
/// editor download routinely takes longer than a help probe.
///
/// # Errors
///
/// Returns [`ProvisionError::EditorInstallFailed`] if the Hub exits non-zero,
/// plus any error from [`stream_hub`].
pub async fn install_editor(
    runner: &impl ProcessRunner,
    fs: &impl LocalFs,
    reporter: &impl ProgressReporter,
    sink: &dyn LineSink,
    hub: &HubConfig,
    version: &str,
    modules: &[String],
) -> Result<StreamOutcome> {
    let args = editor_install_args(version, modules)?;
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    reporter.step(&format!("Installing Unity {}...", version.trim()));
    let outcome = stream_hub(runner, fs, sink, &hub.path, &args, None).await?;

    if !outcome.status.success() {
        return Err(ProvisionError::EditorInstallFailed {
            code: outcome.status.code().unwrap_or(-1),
        }
        .into());
    }
    reporter.success(&format!("Unity {} installed.", version.trim()));
    Ok(outcome)
}
