// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `--output`, `--no-time` and `--no-summary` gating.

use crate::prelude::*;

#[test]
fn none_prints_only_the_banner() {
    cli().args(&["--output", "none", "echo hidden"]).passes().stdout_eq("\nRunning: echo hidden\n");
}

#[test]
fn none_still_sets_failure_exit() {
    cli().args(&["-o", "none", "false"]).fails().stdout_eq("\nRunning: false\n");
}

#[test]
fn errors_mode_hides_successful_output() {
    cli()
        .args(&["echo secret-output"])
        .passes()
        .stdout_lacks("\nsecret-output\n")
        .stdout_lacks("<echo secret-output>");
}

#[test]
fn full_mode_wraps_successful_output_in_tags() {
    cli()
        .args(&["-o", "full", "-t", "echo visible"])
        .passes()
        .stdout_has("\n<echo visible>\n✅ echo visible\nvisible\n</echo visible>\n");
}

#[test]
fn full_mode_tags_use_display_name() {
    cli()
        .args(&["-o", "full", "-t", "sh -c 'echo linted'"])
        .passes()
        .stdout_has("<-c 'echo linted'>\n")
        .stdout_has("</-c 'echo linted'>\n")
        .stdout_lacks("<sh ");
}

#[test]
fn full_mode_closes_unterminated_output() {
    cli()
        .args(&["-o", "full", "-t", "printf partial"])
        .passes()
        .stdout_has("partial\n</printf partial>\n");
}

#[test]
fn no_time_hides_timing() {
    cli().args(&["--no-time", "echo a"]).passes().stdout_lacks("ms)").stdout_lacks("Total time");
}

#[test]
fn no_summary_hides_summary() {
    cli()
        .args(&["--no-summary", "echo a"])
        .passes()
        .stdout_lacks("Summary:")
        .stdout_has("Total time: ");
}

#[test]
fn forced_color_paints_the_summary() {
    cli()
        .args(&["-t", "echo a"])
        .env("NO_COLOR", "0")
        .env("COLOR", "1")
        .passes()
        .stdout_has("\x1b[32mSummary: 1/1 passed\x1b[0m");
}

#[test]
fn no_color_output_has_no_escapes() {
    cli().args(&["echo a", "false"]).fails().stdout_lacks("\x1b[");
}
