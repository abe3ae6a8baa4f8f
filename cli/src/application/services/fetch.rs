//! Application service — installer download use-case.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::application::ports::{DownloadReport, Downloader, ProgressReporter};
use crate::domain::config::{InstallerConfig, validate_installer_file, validate_url};

/// Outcome of [`fetch_installer`].
#[derive(Debug)]
pub struct FetchOutcome {
    /// Where the installer was written.
    pub path: PathBuf,
    /// Size and digest of the written file.
    pub report: DownloadReport,
}

/// Download the Hub installer into `work_dir`.
///
/// The file name comes from `installer.file`, so the result is always
/// `work_dir/<file>`. No integrity check is made on the body.
///
/// # Errors
///
/// Returns an error if the URL or file name is invalid or the download fails.
pub async fn fetch_installer(
    downloader: &impl Downloader,
    reporter: &impl ProgressReporter,
    installer: &InstallerConfig,
    work_dir: &Path,
) -> Result<FetchOutcome> {
    validate_url(&installer.url)?;
    validate_installer_file(&installer.file)?;
    let dest = work_dir.join(&installer.file);

    reporter.step("Downloading the hub installer...");
    tracing::debug!(url = %installer.url, dest = %dest.display(), "starting download");
    let report = downloader.download(&installer.url, &dest).await?;
    tracing::info!(bytes = report.bytes, sha256 = %report.sha256, "installer downloaded");
    reporter.success("Installer downloaded.");

    Ok(FetchOutcome { path: dest, report })
}
