//! Application service — headless Hub probe use-case.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use std::cell::Cell;
use std::path::Path;
use std::process::ExitStatus;
use std::time::Duration;

use anyhow::Result;

use crate::application::ports::{LineSink, LocalFs, ProcessRunner, ProgressReporter};
use crate::domain::config::HubConfig;
use crate::domain::error::ProvisionError;

/// Outcome of a streamed Hub invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamOutcome {
    /// Number of stdout lines forwarded to the sink.
    pub lines: usize,
    /// Exit status of the Hub process.
    pub status: ExitStatus,
}

/// Forwards lines to another sink and counts them.
struct CountingSink<'a> {
    inner: &'a dyn LineSink,
    count: Cell<usize>,
}

impl LineSink for CountingSink<'_> {
    fn line(&self, line: &str) {
        self.count.set(self.count.get() + 1);
        self.inner.line(line);
    }
}

/// Run the Hub at `hub_path` with `args`, streaming stdout into `sink`.
///
/// # Errors
///
/// Returns [`ProvisionError::HubMissing`] if the executable does not exist,
/// or whatever the runner reports (spawn failure, read failure, timeout).
pub async fn stream_hub(
    runner: &impl ProcessRunner,
    fs: &impl LocalFs,
    sink: &dyn LineSink,
    hub_path: &str,
    args: &[&str],
    timeout: Option<Duration>,
) -> Result<StreamOutcome> {
    if !fs.exists(Path::new(hub_path)) {
        return Err(ProvisionError::HubMissing(hub_path.to_string()).into());
    }
    let counting = CountingSink {
        inner: sink,
        count: Cell::new(0),
    };
    tracing::debug!(hub = hub_path, ?args, ?timeout, "streaming hub output");
    let status = runner
        .stream_stdout(hub_path, args, &counting, timeout)
        .await?;
    Ok(StreamOutcome {
        lines: counting.count.get(),
        status,
    })
}

/// Run the headless help probe against the installed Hub.
///
/// # Errors
///
/// See [`stream_hub`].
pub async fn probe_hub(
    runner: &impl ProcessRunner,
    fs: &impl LocalFs,
    reporter: &impl ProgressReporter,
    sink: &dyn LineSink,
    hub: &HubConfig,
) -> Result<StreamOutcome> {
    reporter.step("Checking the Hub headless CLI...");
    let args: Vec<&str> = hub.probe_args.iter().map(String::as_str).collect();
    let timeout = hub.probe_timeout_secs.map(Duration::from_secs);
    let outcome = stream_hub(runner, fs, sink, &hub.path, &args, timeout).await?;

    if outcome.status.success() {
        reporter.success(&format!("Hub responded ({} lines).", outcome.lines));
    } else {
        reporter.warn(&format!("Hub exited with {}.", outcome.status));
    }
    Ok(outcome)
}
