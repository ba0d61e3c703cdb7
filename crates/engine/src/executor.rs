// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Single-command process executor.

use std::process::{ExitStatus, Stdio};
use std::sync::Arc;
use std::time::Instant;

use aifr_core::{CommandResult, ExecutionConfig, CANCELLED_MESSAGE};
use tokio_util::sync::CancellationToken;
use tracing::Instrument;

use crate::capture::Capture;
use crate::error::ExecError;
use crate::pool::BufferPool;

/// How the wait for a child ended.
enum Finish {
    Exited(std::io::Result<ExitStatus>),
    /// Still running after the termination grace period.
    Overdue,
}

/// Runs one command to completion and normalizes the outcome.
#[derive(Debug, Clone)]
pub struct Executor {
    pool: Arc<BufferPool>,
}

impl Default for Executor {
    fn default() -> Self {
        Self::new()
    }
}

impl Executor {
    pub fn new() -> Self {
        Self { pool: BufferPool::new() }
    }

    pub fn pool(&self) -> &Arc<BufferPool> {
        &self.pool
    }

    /// Execute `command` and return its result.
    ///
    /// Never fails: setup errors, non-zero exits, signals and cancellation
    /// all come back as a result with `is_success == false`.
    pub async fn execute(
        &self,
        command: &str,
        config: &ExecutionConfig,
        cancel: &CancellationToken,
    ) -> CommandResult {
        let span = tracing::info_span!(
            "aifr.cmd",
            cmd = %command,
            exit_code = tracing::field::Empty,
            duration_ms = tracing::field::Empty,
        );

        async {
            let start = Instant::now();
            let result = match self.run(command, config, cancel, start).await {
                Ok(result) => result,
                Err(err) => {
                    tracing::debug!(error = %err, "command did not run");
                    CommandResult::failure(command, start.elapsed(), err.to_string())
                }
            };

            let span = tracing::Span::current();
            if let Some(code) = result.exit_code {
                span.record("exit_code", code);
            }
            span.record("duration_ms", result.duration.as_millis() as u64);
            tracing::debug!(success = result.is_success, "command finished");
            result
        }
        .instrument(span)
        .await
    }

    async fn run(
        &self,
        command: &str,
        config: &ExecutionConfig,
        cancel: &CancellationToken,
        start: Instant,
    ) -> Result<CommandResult, ExecError> {
        let argv = shell_words::split(command)?;
        let Some((program, args)) = argv.split_first() else {
            return Err(ExecError::EmptyCommand);
        };

        let mut process = tokio::process::Command::new(program);
        process
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        // Own process group, so cancellation reaches grandchildren that
        // would otherwise keep the pipes open.
        #[cfg(unix)]
        process.process_group(0);

        let mut child = process.spawn().map_err(ExecError::Spawn)?;
        let pid = child.id();
        let stdout = child.stdout.take().ok_or_else(|| ExecError::missing_pipe("stdout"))?;
        let stderr = child.stderr.take().ok_or_else(|| ExecError::missing_pipe("stderr"))?;

        let capture = Capture::new(config.mode, command);
        let mut out_buf = self.pool.checkout();
        let mut err_buf = self.pool.checkout();
        let mut cancelled = false;

        let finish = {
            // Both pipes must reach EOF before waiting, or a child blocked on
            // a full pipe would never exit.
            let outcome = async {
                let (out_res, err_res) = tokio::join!(
                    capture.drain(stdout, &mut out_buf),
                    capture.drain(stderr, &mut err_buf),
                );
                if let Err(e) = out_res {
                    tracing::warn!(error = %e, "stdout capture ended early");
                }
                if let Err(e) = err_res {
                    tracing::warn!(error = %e, "stderr capture ended early");
                }
                child.wait().await
            };
            tokio::pin!(outcome);

            tokio::select! {
                status = &mut outcome => Finish::Exited(status),
                _ = cancel.cancelled() => {
                    cancelled = true;
                    if request_termination(pid) {
                        match tokio::time::timeout(config.termination_grace, &mut outcome).await {
                            Ok(status) => Finish::Exited(status),
                            Err(_) => Finish::Overdue,
                        }
                    } else {
                        Finish::Overdue
                    }
                }
            }
        };

        let status = match finish {
            Finish::Exited(status) => status,
            Finish::Overdue => {
                tracing::debug!(?pid, "force killing command");
                force_kill(pid);
                if let Err(e) = child.start_kill() {
                    tracing::debug!(error = %e, "kill failed, process already gone");
                }
                child.wait().await
            }
        }
        .map_err(ExecError::Wait)?;

        let duration = start.elapsed();
        let mut stderr_text = err_buf.to_string_lossy();
        if cancelled {
            append_line(&mut stderr_text, CANCELLED_MESSAGE);
        } else if let Some(signal) = termination_signal(&status) {
            append_line(&mut stderr_text, &format!("Terminated by signal {signal}"));
        }

        Ok(CommandResult {
            command: command.to_string(),
            duration,
            is_success: status.success() && !cancelled,
            stdout: out_buf.to_string_lossy(),
            stderr: stderr_text,
            exit_code: status.code(),
        })
    }
}

fn append_line(text: &mut String, line: &str) {
    if !text.is_empty() && !text.ends_with('\n') {
        text.push('\n');
    }
    text.push_str(line);
}

/// Ask the command's process group to exit. Returns false when no polite
/// request could be delivered and the caller should kill outright.
#[cfg(unix)]
fn request_termination(pid: Option<u32>) -> bool {
    signal_group(pid, nix::sys::signal::Signal::SIGTERM)
}

#[cfg(not(unix))]
fn request_termination(_pid: Option<u32>) -> bool {
    false
}

#[cfg(unix)]
fn force_kill(pid: Option<u32>) {
    signal_group(pid, nix::sys::signal::Signal::SIGKILL);
}

#[cfg(not(unix))]
fn force_kill(_pid: Option<u32>) {}

#[cfg(unix)]
fn signal_group(pid: Option<u32>, signal: nix::sys::signal::Signal) -> bool {
    use nix::unistd::Pid;

    let Some(raw) = pid.and_then(|p| i32::try_from(p).ok()) else {
        return false;
    };
    match nix::sys::signal::killpg(Pid::from_raw(raw), signal) {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!(pid = raw, %signal, error = %e, "signal delivery failed");
            false
        }
    }
}

#[cfg(unix)]
fn termination_signal(status: &ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn termination_signal(_status: &ExitStatus) -> Option<i32> {
    None
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
