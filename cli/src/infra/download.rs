//! HTTP download infrastructure — implements `Downloader` with `ureq`.

use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};

use crate::application::ports::{DownloadReport, Downloader};
use crate::domain::error::ProvisionError;
use crate::domain::hub::hex_encode;

const USER_AGENT: &str = concat!("hub-provision/", env!("CARGO_PKG_VERSION"));

/// Production downloader. The blocking client runs on tokio's blocking pool.
#[derive(Debug, Clone, Copy)]
pub struct UreqDownloader {
    show_progress: bool,
}

impl UreqDownloader {
    #[must_use]
    pub fn new(show_progress: bool) -> Self {
        Self { show_progress }
    }
}

impl Downloader for UreqDownloader {
    async fn download(&self, url: &str, dest: &Path) -> Result<DownloadReport> {
        let url = url.to_string();
        let dest = dest.to_path_buf();
        let show_progress = self.show_progress;
        tokio::task::spawn_blocking(move || download_blocking(&url, &dest, show_progress))
            .await
            .map_err(|e| anyhow::anyhow!("spawn_blocking panicked: {e}"))?
    }
}

/// Fetch `url` into `dest` via a `.partial` sibling that is renamed on success.
///
/// # Errors
///
/// Returns [`ProvisionError::DownloadStatus`] for a non-200 reply,
/// [`ProvisionError::DownloadFailed`] for transport failures, or a filesystem
/// error.
pub fn download_blocking(url: &str, dest: &Path, show_progress: bool) -> Result<DownloadReport> {
    let response = match ureq::get(url).set("User-Agent", USER_AGENT).call() {
        Ok(r) => r,
        Err(ureq::Error::Status(code, _)) => {
            return Err(ProvisionError::DownloadStatus {
                url: url.to_string(),
                code,
            }
            .into());
        }
        Err(ureq::Error::Transport(t)) => {
            return Err(ProvisionError::DownloadFailed {
                url: url.to_string(),
                reason: t.to_string(),
            }
            .into());
        }
    };

    let status = response.status();
    if status != 200 {
        return Err(ProvisionError::DownloadStatus {
            url: url.to_string(),
            code: status,
        }
        .into());
    }

    let total = response
        .header("Content-Length")
        .and_then(|v| v.parse::<u64>().ok());
    let partial = partial_path(dest);

    let written = write_body(response.into_reader(), &partial, total, show_progress);
    let report = match written {
        Ok(report) => report,
        Err(e) => {
            std::fs::remove_file(&partial).ok();
            return Err(e);
        }
    };
    std::fs::rename(&partial, dest)
        .with_context(|| format!("failed to finalize {}", dest.display()))?;
    Ok(report)
}

fn partial_path(dest: &Path) -> PathBuf {
    let mut s = dest.as_os_str().to_owned();
    s.push(".partial");
    PathBuf::from(s)
}

fn write_body(
    mut reader: impl Read,
    partial: &Path,
    total: Option<u64>,
    show_progress: bool,
) -> Result<DownloadReport> {
    let mut file =
        File::create(partial).with_context(|| format!("creating {}", partial.display()))?;
    let pb = make_progress_bar(show_progress, total);
    let mut hasher = Sha256::new();
    let mut bytes = 0u64;
    let mut buf = vec![0u8; 64 * 1024];
    loop {
        let n = reader.read(&mut buf).context("Download interrupted")?;
        if n == 0 {
            break;
        }
        file.write_all(&buf[..n])
            .with_context(|| format!("writing {}", partial.display()))?;
        hasher.update(&buf[..n]);
        bytes += n as u64;
        pb.inc(n as u64);
    }
    file.sync_all()
        .with_context(|| format!("flushing {}", partial.display()))?;
    pb.finish_and_clear();

    if let Some(expected) = total {
        anyhow::ensure!(
            bytes == expected,
            "Download interrupted: got {bytes} of {expected} bytes"
        );
    }
    Ok(DownloadReport {
        bytes,
        sha256: hex_encode(&hasher.finalize()),
    })
}

fn make_progress_bar(show: bool, total: Option<u64>) -> indicatif::ProgressBar {
    if !show {
        return indicatif::ProgressBar::hidden();
    }
    if let Some(t) = total {
        let pb = indicatif::ProgressBar::new(t);
        pb.set_style(
            indicatif::ProgressStyle::default_bar()
                .template("    {bar:40.cyan/dim} {percent}%  {bytes}/{total_bytes}")
                .unwrap_or_else(|_| indicatif::ProgressStyle::default_bar())
                .progress_chars("━━─"),
        );
        pb
    } else {
        indicatif::ProgressBar::new_spinner()
    }
}
