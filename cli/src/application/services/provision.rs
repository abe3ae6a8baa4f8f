//! Application service — the full CI provisioning flow.
//!
//! Fetch, launch the installer, then probe the Hub. Each step runs after the
//! previous one returns; the installer itself is not awaited unless asked.

use std::path::Path;

use anyhow::Result;

use crate::application::ports::{Downloader, LineSink, LocalFs, ProcessRunner, ProgressReporter};
use crate::application::services::fetch::{FetchOutcome, fetch_installer};
use crate::application::services::install::{InstallOutcome, launch_installer};
use crate::application::services::probe::{StreamOutcome, probe_hub};
use crate::domain::config::ProvisionConfig;

/// Step toggles for [`provision`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ProvisionOptions {
    /// Reuse an installer already present in the working directory.
    pub skip_download: bool,
    /// Await the installer before probing.
    pub wait_install: bool,
}

/// Outcome of the full flow.
#[derive(Debug)]
pub struct ProvisionOutcome {
    /// `None` when the download was skipped.
    pub fetch: Option<FetchOutcome>,
    pub install: InstallOutcome,
    pub probe: StreamOutcome,
}

/// Download, install and probe.
///
/// # Errors
///
/// Returns the first failing step's error; later steps do not run.
#[allow(clippy::too_many_arguments)]
pub async fn provision(
    downloader: &impl Downloader,
    runner: &impl ProcessRunner,
    fs: &impl LocalFs,
    reporter: &impl ProgressReporter,
    sink: &dyn LineSink,
    config: &ProvisionConfig,
    work_dir: &Path,
    opts: ProvisionOptions,
) -> Result<ProvisionOutcome> {
    let fetch = if opts.skip_download {
        None
    } else {
        Some(fetch_installer(downloader, reporter, &config.installer, work_dir).await?)
    };

    let wait = opts.wait_install || config.installer.wait;
    let install = launch_installer(runner, fs, reporter, &config.installer, work_dir, wait).await?;
    let probe = probe_hub(runner, fs, reporter, sink, &config.hub).await?;

    Ok(ProvisionOutcome {
        fetch,
        install,
        probe,
    })
}
