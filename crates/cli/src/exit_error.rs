// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error type that carries the process exit code.
//!
//! `run` returns `ExitError` when the batch finished but a command failed.
//! The report already explains the failure, so `main()` only maps the code.

use std::fmt;

/// Exit code when any command failed or the invocation was rejected.
pub const FAILURE: u8 = 1;

#[derive(Debug)]
pub struct ExitError {
    pub code: u8,
}

impl ExitError {
    pub fn new(code: u8) -> Self {
        Self { code }
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "exit status {}", self.code)
    }
}

impl std::error::Error for ExitError {}

/// Exit code for an error escaping `run`: the carried code of an
/// `ExitError`, otherwise [`FAILURE`].
pub fn code_of(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<ExitError>().map_or(FAILURE, |e| e.code)
}

/// True when `err` still needs to be shown to the user.
pub fn is_unreported(err: &anyhow::Error) -> bool {
    err.downcast_ref::<ExitError>().is_none()
}

#[cfg(test)]
#[path = "exit_error_tests.rs"]
mod tests;
