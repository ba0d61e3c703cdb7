// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line surface.

use std::num::NonZeroUsize;
use std::time::Duration;

use aifr_core::{default_threads, ExecMode, ExecutionConfig, OutputMode};
use clap::{Parser, ValueEnum};

use crate::{color, env};

#[derive(Debug, Parser)]
#[command(
    name = "aifr",
    version = env::VERSION,
    styles = color::styles(),
    about = "Run commands in parallel with AI-friendly output",
    long_about = "Runs several shell commands concurrently and prints a structured, \
                  color-coded report of each command's outcome, timing and output.",
    after_help = "Examples:\n  \
                  aifr \"yarn lint\" \"yarn test\"\n  \
                  aifr --output full \"npm run build\" \"npm test\"\n  \
                  aifr --stream --threads 4 \"cargo test\" \"cargo clippy\""
)]
pub struct Cli {
    /// Commands to run; each one is a single shell-style string
    #[arg(required = true, num_args = 1.., value_name = "COMMAND")]
    pub commands: Vec<String>,

    /// What to print after the run
    #[arg(short, long, value_enum, default_value_t = OutputArg::Errors)]
    pub output: OutputArg,

    /// Hide execution times
    #[arg(short = 't', long)]
    pub no_time: bool,

    /// Hide the summary line
    #[arg(short = 's', long)]
    pub no_summary: bool,

    /// Print output live, line by line, with a command prefix
    #[arg(short = 'w', long)]
    pub stream: bool,

    /// Maximum number of commands running at once [default: CPU count - 1]
    #[arg(
        short = 'n',
        long,
        value_name = "N",
        value_parser = parse_threads,
        allow_negative_numbers = true
    )]
    pub threads: Option<NonZeroUsize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    /// Print nothing after the run
    None,
    /// Status lines plus details of failed commands
    Errors,
    /// Also print the output of successful commands
    Full,
}

impl From<OutputArg> for OutputMode {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::None => OutputMode::Silent,
            OutputArg::Errors => OutputMode::ErrorsOnly,
            OutputArg::Full => OutputMode::Full,
        }
    }
}

fn parse_threads(s: &str) -> Result<NonZeroUsize, String> {
    let n: i64 = s.trim().parse().map_err(|_| format!("invalid number: {s}"))?;
    usize::try_from(n)
        .ok()
        .and_then(NonZeroUsize::new)
        .ok_or_else(|| format!("threads must be >= 1, got: {n}"))
}

impl Cli {
    pub fn into_config(self, termination_grace: Duration) -> (Vec<String>, ExecutionConfig) {
        let mode = if self.stream {
            ExecMode::Streamed
        } else {
            ExecMode::Buffered
        };
        let config = ExecutionConfig::default()
            .output(self.output.into())
            .show_time(!self.no_time)
            .show_summary(!self.no_summary)
            .mode(mode)
            .concurrency(self.threads.unwrap_or_else(default_threads))
            .termination_grace(termination_grace);
        (self.commands, config)
    }
}

#[cfg(test)]
#[path = "args_tests.rs"]
mod tests;
