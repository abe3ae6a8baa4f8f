//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use std::time::Duration;

use anyhow::Result;

use crate::domain::ProvisionConfig;

// ── Value Types ───────────────────────────────────────────────────────────────

/// What a finished download left on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadReport {
    /// Bytes written to the destination file.
    pub bytes: u64,
    /// Hex-encoded SHA-256 of the file, for the CI log only.
    pub sha256: String,
}

/// Result of launching a process that the caller does not read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Launch {
    /// Spawned and left running.
    Detached {
        /// OS process id, when the platform still reports one.
        pid: Option<u32>,
    },
    /// Spawned and awaited.
    Exited(ExitStatus),
}

// ── Download Port ─────────────────────────────────────────────────────────────

/// Fetches a remote file to local disk.
#[allow(async_fn_in_trait)]
pub trait Downloader {
    /// Download `url` into `dest`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error on a non-200 status, a transport failure, or a
    /// filesystem error. A failed download never leaves `dest` half written.
    async fn download(&self, url: &str, dest: &Path) -> Result<DownloadReport>;
}

// ── Process Port ──────────────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait ProcessRunner {
    /// Spawn a program with detached stdio.
    ///
    /// When `wait` is `false` the call returns as soon as the process is
    /// spawned; the child keeps running after this returns.
    async fn launch(&self, program: &str, args: &[&str], wait: bool) -> Result<Launch>;

    /// Spawn a program and forward each stdout line to `sink`.
    ///
    /// Returns once stdout is exhausted and the process has exited.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned, if reading fails,
    /// or if `timeout` elapses first (the child is killed in that case).
    async fn stream_stdout(
        &self,
        program: &str,
        args: &[&str],
        sink: &dyn LineSink,
        timeout: Option<Duration>,
    ) -> Result<ExitStatus>;
}

/// Receives decoded output lines from a streamed child process.
pub trait LineSink {
    /// Handle one line, without its trailing newline.
    fn line(&self, line: &str);
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}

// ── Config and Filesystem Ports ───────────────────────────────────────────────

/// Abstracts loading the provisioning configuration.
pub trait ConfigStore {
    /// Load the configuration, falling back to defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    fn load(&self) -> Result<ProvisionConfig>;
    /// Location of the configuration file (it may not exist).
    ///
    /// # Errors
    ///
    /// Returns an error if no location can be determined.
    fn path(&self) -> Result<PathBuf>;
}

/// Abstracts the existence checks made before a path is invoked.
pub trait LocalFs {
    /// Whether `path` exists on the local filesystem.
    fn exists(&self, path: &Path) -> bool;
}
