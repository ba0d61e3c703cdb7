// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Setup failures that stop a command before it produces an exit status.
//!
//! These never escape the executor: the `Display` text becomes the
//! `stderr` of a failed result.

/// Errors that can occur while preparing or supervising a subprocess.
#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    /// The command string could not be split into words (e.g. open quote).
    #[error("Invalid command: {0}")]
    InvalidCommand(#[from] shell_words::ParseError),

    /// The command string contained no words.
    #[error("Empty command")]
    EmptyCommand,

    /// A stdio pipe was not available after spawn.
    #[error("Failed to create {stream} pipe: {message}")]
    Pipe {
        stream: &'static str,
        message: String,
    },

    /// Program not found, not executable, or fork failed.
    #[error("Failed to start command: {0}")]
    Spawn(#[source] std::io::Error),

    /// Waiting on the child failed after it started.
    #[error("Failed to wait for command: {0}")]
    Wait(#[source] std::io::Error),
}

impl ExecError {
    pub(crate) fn missing_pipe(stream: &'static str) -> Self {
        ExecError::Pipe {
            stream,
            message: "stream was not captured".to_string(),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
