//! Application context — unified state passed to every command handler.
//!
//! Constructed once in `Cli::run()`; holds output settings, the loaded
//! configuration, and the production port implementations.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::application::services::config_service;
use crate::domain::config::ProvisionConfig;
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::config::YamlConfigStore;
use crate::infra::download::UreqDownloader;
use crate::infra::fs::RealFs;
use crate::output::{OutputContext, TerminalReporter};

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Explicit config file path (`--config`).
    pub config: Option<PathBuf>,
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Effective, validated configuration.
    pub config: ProvisionConfig,
    /// Where the configuration came from.
    pub config_store: YamlConfigStore,
    /// Process runner for the installer and the Hub.
    pub runner: TokioCommandRunner,
    /// HTTP downloader for the installer.
    pub downloader: UreqDownloader,
    /// Existence checks before invoking paths.
    pub fs: RealFs,
    /// Directory the installer is downloaded into.
    pub work_dir: PathBuf,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is unreadable or invalid, or the
    /// working directory cannot be determined.
    pub fn new(flags: AppFlags) -> Result<Self> {
        let output = OutputContext::new(flags.no_color, flags.quiet);
        let config_store = YamlConfigStore::new(flags.config);
        let config = config_service::load_config(&config_store)?;
        let work_dir = std::env::current_dir().context("cannot determine working directory")?;
        let downloader = UreqDownloader::new(output.show_progress());

        Ok(Self {
            output,
            config,
            config_store,
            runner: TokioCommandRunner,
            downloader,
            fs: RealFs,
            work_dir,
        })
    }

    /// Returns a `TerminalReporter` that wraps this context's output.
    #[must_use]
    pub fn terminal_reporter(&self) -> TerminalReporter<'_> {
        TerminalReporter::new(&self.output)
    }
}
