// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `--stream` prints prefixed lines live and still reports captured output.

use crate::prelude::*;

#[test]
fn streamed_lines_carry_padded_prefix() {
    cli().args(&["--stream", "-t", "echo hi"]).passes().stdout_has("[echo hi        ]: hi\n");
}

#[test]
fn long_commands_are_cut_in_prefix() {
    cli()
        .args(&["-w", "echo abcdefghijklmnop"])
        .passes()
        .stdout_has("[echo abcdefghij]: abcdefghijklmnop\n");
}

#[test]
fn streamed_stderr_also_goes_to_stdout() {
    cli()
        .args(&["-w", "-t", "sh -c 'echo oops >&2'"])
        .passes()
        .stdout_has("[sh -c 'echo oop]: oops\n");
}

#[test]
fn streamed_failure_still_has_failure_block() {
    cli()
        .args(&["-w", "-t", "sh -c 'echo bad; exit 1'"])
        .fails()
        .stdout_has("[sh -c 'echo bad]: bad\n")
        .stdout_has("<-c 'echo bad; exit 1'>\n❌ -c 'echo bad; exit 1':\nbad\n</-c 'echo bad; exit 1'>\n");
}

#[test]
fn streamed_lines_come_before_report() {
    let run = cli().args(&["-w", "echo early"]).passes();
    let stdout = run.stdout();
    let line = stdout.find("]: early").unwrap();
    let status = stdout.find("✅ echo early").unwrap();
    assert!(line < status, "stream line after report:\n{stdout}");
}
