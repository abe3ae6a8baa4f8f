//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

// ── Provisioning errors ───────────────────────────────────────────────────────

/// Failures of the fetch, install, probe and editor steps.
#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("Download failed: HTTP {code} from {url}")]
    DownloadStatus { url: String, code: u16 },

    #[error("Download failed: cannot reach {url}: {reason}")]
    DownloadFailed { url: String, reason: String },

    #[error("Installer not found at {0}. Run 'hub-provision download' first.")]
    InstallerMissing(String),

    #[error("Unity Hub not found at {0}. Is the Hub installed?")]
    HubMissing(String),

    #[error("Unity Hub did not exit within {secs}s")]
    ProbeTimedOut { secs: u64 },

    #[error("Editor install failed with exit code {code}")]
    EditorInstallFailed { code: i32 },
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to configuration validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}\n\n{hint}")]
    InvalidValue {
        key: &'static str,
        value: String,
        hint: &'static str,
    },
}
