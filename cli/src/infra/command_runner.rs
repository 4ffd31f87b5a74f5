//! Infrastructure implementation of the `CommandRunner` port.
//!
//! `TokioCommandRunner` spawns the program with stdout and stderr both
//! attached to the write end of one OS pipe, so the child's writes land in a
//! single stream in the order it made them. One reader drains the read end,
//! handing each line to the output sink the moment it is read and pushing it
//! onto a channel; the caller awaits the channel until the pipe hits EOF.

use std::io::{BufRead, BufReader, PipeReader};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::application::ports::{CommandRunner, OutputSink, ProcessInvocation};
use crate::domain::VagrantError;

/// Production `CommandRunner` backed by `tokio::process`.
///
/// With no timeout configured a hung child hangs the caller indefinitely;
/// there is no other cancellation path.
pub struct TokioCommandRunner {
    timeout: Option<Duration>,
}

impl TokioCommandRunner {
    #[must_use]
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }
}

/// Read the merged output pipe line by line until EOF, forwarding every line
/// to `sink` and `tx`. Invalid UTF-8 is replaced rather than ending the stream.
///
/// The pipe end is a blocking handle, so the loop runs on the blocking pool.
fn spawn_reader(
    reader: PipeReader,
    tx: mpsc::UnboundedSender<String>,
    sink: Arc<dyn OutputSink>,
) -> JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        let mut reader = BufReader::new(reader);
        let mut buf = Vec::new();
        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => {
                    if buf.ends_with(b"\n") {
                        buf.pop();
                        if buf.ends_with(b"\r") {
                            buf.pop();
                        }
                    }
                    let line = String::from_utf8_lossy(&buf).into_owned();
                    sink.line(&line);
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    warn!(error = %e, "error reading process output");
                    break;
                }
            }
        }
    })
}

impl CommandRunner for TokioCommandRunner {
    async fn run(
        &self,
        program: &Path,
        args: &[&str],
        cwd: &Path,
        sink: Arc<dyn OutputSink>,
    ) -> Result<ProcessInvocation> {
        let command_line = std::iter::once(program.display().to_string())
            .chain(args.iter().map(|a| (*a).to_string()))
            .collect::<Vec<_>>()
            .join(" ");
        info!(command = %command_line, cwd = %cwd.display(), "executing");

        let (pipe_reader, pipe_writer) =
            std::io::pipe().context("cannot create output pipe")?;
        let stderr_writer = pipe_writer
            .try_clone()
            .context("cannot duplicate output pipe")?;

        // The command owns the parent's copies of the write end and is dropped
        // at the end of this statement, so EOF arrives once the child exits.
        let mut child = tokio::process::Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(std::process::Stdio::null())
            .stdout(pipe_writer)
            .stderr(stderr_writer)
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to spawn {}", program.display()))?;

        let (tx, mut rx) = mpsc::unbounded_channel();
        let reader = spawn_reader(pipe_reader, tx, sink);

        let deadline = async {
            match self.timeout {
                Some(timeout) => tokio::time::sleep(timeout).await,
                None => std::future::pending::<()>().await,
            }
        };

        // The channel closes once the reader drops its sender at EOF, so
        // draining it before wait() also keeps the pipe from filling up.
        let (status, lines) = tokio::select! {
            result = async {
                let mut lines = Vec::new();
                while let Some(line) = rx.recv().await {
                    lines.push(line);
                }
                if let Err(e) = reader.await {
                    warn!(error = %e, "output reader task failed");
                }
                let status = child
                    .wait()
                    .await
                    .with_context(|| format!("waiting for {}", program.display()))?;
                Ok::<_, anyhow::Error>((status, lines))
            } => result?,
            () = deadline => {
                let _ = child.kill().await;
                let secs = self.timeout.map_or(0, |t| t.as_secs());
                warn!(command = %command_line, secs, "process timed out");
                return Err(VagrantError::Timeout { command: command_line, secs }.into());
            }
        };

        let exit_code = status.code().unwrap_or(-1);
        info!(command = %command_line, exit_code, lines = lines.len(), "finished");

        Ok(ProcessInvocation {
            program: program.to_path_buf(),
            args: args.iter().map(|a| (*a).to_string()).collect(),
            cwd: cwd.to_path_buf(),
            lines,
            exit_code,
        })
    }
}
