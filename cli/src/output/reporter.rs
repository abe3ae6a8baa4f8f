//! Presentation-layer implementations of application output ports.
//!
//! `TerminalReporter` implements `ProgressReporter` and `ConsoleLines`
//! implements `LineSink`, so application services can emit progress events
//! and child-process output without depending on any presentation type.

use std::io::Write as _;

use owo_colors::OwoColorize as _;

use crate::application::ports::{LineSink, ProgressReporter};
use crate::output::OutputContext;

/// Terminal progress reporter that wraps an `OutputContext`.
///
/// - `step()` prints `"  → {message}"` (suppressed when `ctx.quiet`)
/// - `success()` prints `"  ✓ {message}"` (suppressed when `ctx.quiet`)
/// - `warn()` prints `"  ⚠ {message}"` (suppressed when `ctx.quiet`)
pub struct TerminalReporter<'a> {
    ctx: &'a OutputContext,
}

impl<'a> TerminalReporter<'a> {
    /// Create a new `TerminalReporter` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }
}

impl ProgressReporter for TerminalReporter<'_> {
    fn step(&self, message: &str) {
        if !self.ctx.quiet {
            println!("  {} {message}", "→".style(self.ctx.styles.step));
        }
    }

    fn success(&self, message: &str) {
        self.ctx.success(message);
    }

    fn warn(&self, message: &str) {
        self.ctx.warn(message);
    }
}

/// Writes streamed child output to stdout verbatim, one line at a time.
///
/// Not affected by `--quiet`: the lines are the command's payload.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleLines;

impl LineSink for ConsoleLines {
    fn line(&self, line: &str) {
        let mut out = std::io::stdout().lock();
        // Write errors are dropped so the caller keeps draining the child's pipe.
        let _ = writeln!(out, "{line}");
        let _ = out.flush();
    }
}
