// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-run execution and display configuration.

use std::num::NonZeroUsize;
use std::time::Duration;

use crate::threads::default_threads;

/// Time a cancelled process gets between SIGTERM and a forced kill.
pub const DEFAULT_TERMINATION_GRACE: Duration = Duration::from_secs(5);

/// How much of the report to print.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Print nothing.
    Silent,
    /// Status lines plus full output of failed commands.
    #[default]
    ErrorsOnly,
    /// Like `ErrorsOnly`, and successful commands also show their output.
    Full,
}

/// How process output is captured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExecMode {
    /// Capture silently, report after exit.
    #[default]
    Buffered,
    /// Print each line live with a command prefix while capturing.
    Streamed,
}

/// Immutable configuration for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionConfig {
    pub output: OutputMode,
    pub show_time: bool,
    pub show_summary: bool,
    pub mode: ExecMode,
    pub concurrency: NonZeroUsize,
    pub termination_grace: Duration,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            output: OutputMode::default(),
            show_time: true,
            show_summary: true,
            mode: ExecMode::default(),
            concurrency: default_threads(),
            termination_grace: DEFAULT_TERMINATION_GRACE,
        }
    }
}

impl ExecutionConfig {
    pub fn output(mut self, output: OutputMode) -> Self {
        self.output = output;
        self
    }

    pub fn show_time(mut self, show: bool) -> Self {
        self.show_time = show;
        self
    }

    pub fn show_summary(mut self, show: bool) -> Self {
        self.show_summary = show;
        self
    }

    pub fn mode(mut self, mode: ExecMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn concurrency(mut self, limit: NonZeroUsize) -> Self {
        self.concurrency = limit;
        self
    }

    pub fn termination_grace(mut self, grace: Duration) -> Self {
        self.termination_grace = grace;
        self
    }

    pub fn is_streamed(&self) -> bool {
        self.mode == ExecMode::Streamed
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
