// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Help and version output.

use crate::prelude::*;

#[test]
fn help_shows_usage_and_exits_zero() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("Usage:")
        .stdout_has("--output")
        .stdout_has("--no-time")
        .stdout_has("--no-summary")
        .stdout_has("--stream")
        .stdout_has("--threads");
}

#[test]
fn short_help_exits_zero() {
    cli().args(&["-h"]).passes().stdout_has("Usage:");
}

#[test]
fn help_lists_output_values() {
    cli().args(&["--help"]).passes().stdout_has("none").stdout_has("errors").stdout_has("full");
}

#[test]
fn version_shows_package_version() {
    cli().args(&["--version"]).passes().stdout_has("aifr").stdout_has(env!("CARGO_PKG_VERSION"));
}

#[test]
fn help_runs_nothing() {
    cli().args(&["--help", "echo should-not-run"]).passes().stdout_lacks("Running:");
}
