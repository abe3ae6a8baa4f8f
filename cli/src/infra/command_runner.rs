//! Infrastructure implementation of the `ProcessRunner` port.
//!
//! `TokioCommandRunner` is the production implementation that uses tokio
//! for async process execution. The streaming path kills the child when an
//! optional timeout fires; without one it waits for as long as the child
//! keeps stdout open.

use std::process::{ExitStatus, Stdio};
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

use crate::application::ports::{Launch, LineSink, ProcessRunner};
use crate::domain::error::ProvisionError;
use crate::domain::lines::decode_line;

/// Production `ProcessRunner` backed by `tokio::process`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioCommandRunner;

impl ProcessRunner for TokioCommandRunner {
    async fn launch(&self, program: &str, args: &[&str], wait: bool) -> Result<Launch> {
        // No kill_on_drop: a detached installer must outlive its handle.
        let mut child = tokio::process::Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("failed to spawn {program}"))?;

        if !wait {
            return Ok(Launch::Detached { pid: child.id() });
        }
        let status = child
            .wait()
            .await
            .with_context(|| format!("waiting for {program}"))?;
        Ok(Launch::Exited(status))
    }

    async fn stream_stdout(
        &self,
        program: &str,
        args: &[&str],
        sink: &dyn LineSink,
        timeout: Option<Duration>,
    ) -> Result<ExitStatus> {
        let mut child = tokio::process::Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to spawn {program}"))?;

        let stdout = child
            .stdout
            .take()
            .with_context(|| format!("no stdout handle for {program}"))?;

        let drain = async {
            let lines = pump_lines(stdout, sink)
                .await
                .with_context(|| format!("reading output of {program}"))?;
            let status = child
                .wait()
                .await
                .with_context(|| format!("waiting for {program}"))?;
            tracing::debug!(program, lines, %status, "child finished");
            Ok::<ExitStatus, anyhow::Error>(status)
        };

        let Some(limit) = timeout else {
            return drain.await;
        };

        tokio::select! {
            result = drain => result,
            () = tokio::time::sleep(limit) => {
                let _ = child.kill().await;
                Err(ProvisionError::ProbeTimedOut { secs: limit.as_secs() }.into())
            }
        }
    }
}

/// Forward every line of `reader` to `sink` until end of stream.
///
/// A blocked read keeps the loop waiting; only an empty read (EOF) ends it.
/// A trailing fragment without a newline is forwarded as a final line.
/// Returns the number of lines forwarded.
///
/// # Errors
///
/// Returns an error if reading from the stream fails.
pub async fn pump_lines<R>(reader: R, sink: &dyn LineSink) -> Result<usize>
where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::with_capacity(256);
    let mut count = 0;
    loop {
        buf.clear();
        let n = reader.read_until(b'\n', &mut buf).await?;
        if n == 0 {
            return Ok(count);
        }
        sink.line(&decode_line(&buf));
        count += 1;
    }
}
