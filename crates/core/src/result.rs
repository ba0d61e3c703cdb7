// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-command outcome records.

use std::time::Duration;

/// Stderr text for commands that never ran, or were stopped, because the
/// batch was cancelled.
pub const CANCELLED_MESSAGE: &str = "Cancelled by user";

/// Outcome of running one command.
///
/// Created once by the executor and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// The command string exactly as supplied by the caller.
    pub command: String,
    /// Time from spawn to exit. Excludes time spent waiting for admission.
    pub duration: Duration,
    /// True iff the process ran and exited with status 0.
    pub is_success: bool,
    pub stdout: String,
    pub stderr: String,
    /// Exit code of a process that exited normally.
    pub exit_code: Option<i32>,
}

impl CommandResult {
    /// A failure that happened before (or instead of) a process exit.
    pub fn failure(command: impl Into<String>, duration: Duration, stderr: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            duration,
            is_success: false,
            stdout: String::new(),
            stderr: stderr.into(),
            exit_code: None,
        }
    }

    /// Result for a command that was cancelled before it was admitted.
    pub fn cancelled(command: impl Into<String>) -> Self {
        Self::failure(command, Duration::ZERO, CANCELLED_MESSAGE)
    }

    /// Whole milliseconds of `duration`, truncated.
    pub fn duration_ms(&self) -> u128 {
        self.duration.as_millis()
    }
}

/// True iff every result succeeded. Vacuously true for an empty slice.
pub fn all_passed(results: &[CommandResult]) -> bool {
    results.iter().all(|r| r.is_success)
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
