// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! aifr: run commands in parallel and report the results in an
//! AI-friendly format.

mod args;
mod color;
mod env;
mod exit_error;
mod report;
mod signal;

use std::process::ExitCode;

use aifr_core::all_passed;
use aifr_engine::Runner;
use anyhow::Context;
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

use crate::args::Cli;
use crate::exit_error::{ExitError, FAILURE};

fn main() -> ExitCode {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version go to stdout and are not failures.
            let code = if e.use_stderr() { FAILURE } else { 0 };
            if let Err(io) = e.print() {
                tracing::debug!(error = %io, "failed to print usage");
            }
            return ExitCode::from(code);
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if exit_error::is_unreported(&err) {
                eprintln!("Fatal error: {err:#}");
            }
            ExitCode::from(exit_error::code_of(&err))
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_new(env::log_filter())
        .unwrap_or_else(|_| EnvFilter::new(env::DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let (commands, config) = cli.into_config(env::termination_grace());
    tracing::debug!(?config, commands = commands.len(), "starting batch");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let results = runtime.block_on(async {
        let cancel = CancellationToken::new();
        signal::spawn_cancel_on_signal(cancel.clone());

        report::announce(&commands).context("failed to write to stdout")?;
        let results = Runner::default().run_all(&commands, &config, &cancel).await;

        // Releases the signal listener.
        cancel.cancel();
        anyhow::Ok(results)
    })?;

    report::print_report(&results, &config).context("failed to write report")?;

    if all_passed(&results) {
        Ok(())
    } else {
        Err(ExitError::new(FAILURE).into())
    }
}
