// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Usage errors exit 1 before anything is scheduled.

use crate::prelude::*;

#[test]
fn no_commands_is_a_usage_error() {
    cli().fails().stdout_lacks("Running:").stderr_has("Usage:");
}

#[test]
fn invalid_output_value_is_rejected() {
    cli()
        .args(&["--output", "verbose", "echo hi"])
        .fails()
        .stdout_lacks("Running:")
        .stderr_has("verbose");
}

#[test]
fn zero_threads_is_rejected() {
    cli()
        .args(&["-n", "0", "echo hi"])
        .fails()
        .stdout_lacks("Running:")
        .stderr_has("threads must be >= 1, got: 0");
}

#[test]
fn negative_threads_is_rejected() {
    cli().args(&["--threads", "-3", "echo hi"]).fails().stderr_has("threads must be >= 1, got: -3");
}

#[test]
fn non_numeric_threads_is_rejected() {
    cli().args(&["-n", "lots", "echo hi"]).fails().stdout_lacks("Running:");
}

#[test]
fn unknown_flag_is_rejected() {
    cli().args(&["--turbo", "echo hi"]).fails().stdout_lacks("Running:");
}

#[test]
fn usage_error_runs_no_command() {
    let dir = tempfile::tempdir().unwrap();
    let marker = dir.path().join("ran");
    let touch = format!("touch {}", marker.display());

    cli().args(&["-n", "0", &touch]).fails();
    assert!(!marker.exists(), "command ran despite usage error");
}
