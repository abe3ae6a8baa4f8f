//! Application service — silent installer launch use-case.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use std::path::Path;

use anyhow::Result;

use crate::application::ports::{Launch, LocalFs, ProcessRunner, ProgressReporter};
use crate::domain::config::InstallerConfig;
use crate::domain::error::ProvisionError;

/// Outcome of [`launch_installer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The installer is running in the background; nothing waited on it.
    Started { pid: Option<u32> },
    /// The installer was awaited and exited with `code`.
    Finished { code: Option<i32> },
}

/// Spawn the downloaded installer with its silent-install flag.
///
/// Unless `wait` is set, this returns as soon as the installer is spawned,
/// so a following probe can race the installation.
///
/// # Errors
///
/// Returns [`ProvisionError::InstallerMissing`] if the installer file does not
/// exist, or an error if it cannot be spawned.
pub async fn launch_installer(
    runner: &impl ProcessRunner,
    fs: &impl LocalFs,
    reporter: &impl ProgressReporter,
    installer: &InstallerConfig,
    work_dir: &Path,
    wait: bool,
) -> Result<InstallOutcome> {
    let path = work_dir.join(&installer.file);
    if !fs.exists(&path) {
        return Err(ProvisionError::InstallerMissing(path.display().to_string()).into());
    }
    let program = path.to_string_lossy();

    reporter.step("Running the installer silently...");
    let launch = runner
        .launch(&program, &[installer.silent_flag.as_str()], wait)
        .await?;

    match launch {
        Launch::Detached { pid } => {
            tracing::debug!(?pid, "installer left running");
            reporter.success("Installer started.");
            Ok(InstallOutcome::Started { pid })
        }
        Launch::Exited(status) => {
            if status.success() {
                reporter.success("Installer finished.");
            } else {
                reporter.warn(&format!("Installer exited with {status}."));
            }
            Ok(InstallOutcome::Finished {
                code: status.code(),
            })
        }
    }
}
