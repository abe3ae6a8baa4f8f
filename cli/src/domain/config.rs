//! Domain types and validators for provisioning configuration.
//!
//! Pure functions only — no I/O, no async, no filesystem access.

use std::path::{Component, Path};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Constants ────────────────────────────────────────────────────────────────

pub const DEFAULT_INSTALLER_URL: &str =
    "https://public-cdn.cloud.unity3d.com/hub/prod/UnityHubSetup.exe";
pub const DEFAULT_INSTALLER_FILE: &str = "hubinstaller.exe";
pub const DEFAULT_SILENT_FLAG: &str = "/S";
pub const DEFAULT_HUB_PATH: &str = r"C:\Program Files\Unity Hub\Unity Hub.exe";
pub const DEFAULT_PROBE_ARGS: &[&str] = &["--", "--headless", "help"];

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.hub-provision/config.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProvisionConfig {
    /// Where the installer comes from and how it is launched.
    pub installer: InstallerConfig,
    /// The installed Hub and its headless probe.
    pub hub: HubConfig,
    /// Optional editor install through the Hub CLI.
    pub editor: EditorConfig,
}

/// Installer download and launch settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallerConfig {
    /// HTTP(S) location of the Hub installer.
    pub url: String,
    /// File name the installer is saved under, relative to the working directory.
    pub file: String,
    /// Flag passed to the installer to suppress its UI.
    pub silent_flag: String,
    /// Wait for the installer to exit before moving on.
    pub wait: bool,
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_INSTALLER_URL.to_string(),
            file: DEFAULT_INSTALLER_FILE.to_string(),
            silent_flag: DEFAULT_SILENT_FLAG.to_string(),
            wait: false,
        }
    }
}

/// Installed Hub location and probe arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HubConfig {
    /// Absolute path to the Hub executable.
    pub path: String,
    /// Arguments for the headless help probe.
    pub probe_args: Vec<String>,
    /// Give up on the probe after this many seconds. `None` waits forever.
    pub probe_timeout_secs: Option<u64>,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_HUB_PATH.to_string(),
            probe_args: DEFAULT_PROBE_ARGS.iter().map(ToString::to_string).collect(),
            probe_timeout_secs: None,
        }
    }
}

/// Editor install request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EditorConfig {
    /// Editor version, e.g. `2019.4.28f1`.
    pub version: Option<String>,
    /// Modules to add, e.g. `android`.
    pub modules: Vec<String>,
}

// ── Validators ───────────────────────────────────────────────────────────────

impl ProvisionConfig {
    /// Check every field that the provisioning steps rely on.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field as a [`ConfigError`].
    pub fn validate(&self) -> Result<()> {
        validate_url(&self.installer.url)?;
        validate_installer_file(&self.installer.file)?;
        if self.installer.silent_flag.trim().is_empty() {
            return Err(invalid(
                "installer.silent_flag",
                &self.installer.silent_flag,
                "The silent-install flag must not be empty (NSIS installers use /S).",
            ));
        }
        if self.hub.path.trim().is_empty() {
            return Err(invalid(
                "hub.path",
                &self.hub.path,
                "Set the absolute path of the Unity Hub executable.",
            ));
        }
        if self.hub.probe_timeout_secs == Some(0) {
            return Err(invalid(
                "hub.probe_timeout_secs",
                "0",
                "Use a positive number of seconds, or omit the key to wait forever.",
            ));
        }
        Ok(())
    }
}

/// Validates the installer URL scheme.
///
/// # Errors
///
/// Returns an error unless the URL starts with `http://` or `https://`.
pub fn validate_url(url: &str) -> Result<()> {
    let has_host = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .is_some_and(|rest| !rest.is_empty());
    if !has_host {
        return Err(invalid(
            "installer.url",
            url,
            "Only http:// and https:// URLs are supported.",
        ));
    }
    Ok(())
}

/// Validates that the installer file is a bare file name.
///
/// # Errors
///
/// Returns an error if the name is empty or contains directory components.
pub fn validate_installer_file(file: &str) -> Result<()> {
    let mut components = Path::new(file).components();
    let bare = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );
    if !bare || file.contains(['/', '\\']) {
        return Err(invalid(
            "installer.file",
            file,
            "Use a plain file name; the installer is always saved in the working directory.",
        ));
    }
    Ok(())
}

fn invalid(key: &'static str, value: &str, hint: &'static str) -> anyhow::Error {
    ConfigError::InvalidValue {
        key,
        value: value.to_string(),
        hint,
    }
    .into()
}

// ── Unit tests ───────────────────────────────────────────────────────────────
