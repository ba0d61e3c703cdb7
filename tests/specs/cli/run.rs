// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Exit status and default report.

use std::time::{Duration, Instant};

use crate::prelude::*;

#[test]
fn all_passing_exits_zero() {
    cli()
        .args(&["echo one", "echo two"])
        .passes()
        .stdout_has("\nRunning: echo one, echo two\n")
        .stdout_has("✅ echo one")
        .stdout_has("✅ echo two")
        .stdout_has("Summary: 2/2 passed")
        .stdout_has("Total time: ");
}

#[test]
fn any_failure_exits_one() {
    cli()
        .args(&["echo ok", "sh -c 'echo broken >&2; exit 4'"])
        .fails()
        .stdout_has("✅ echo ok")
        .stdout_has("❌ -c 'echo broken >&2; exit 4'")
        .stdout_has("Summary: 1/2 passed")
        .stdout_has("broken\n");
}

#[test]
fn missing_program_is_reported_as_failure() {
    cli()
        .args(&["no-such-program-for-aifr-specs"])
        .fails()
        .stdout_has("❌ no-such-program-for-aifr-specs")
        .stdout_has("Failed to start command: ");
}

#[test]
fn empty_command_string_fails() {
    cli().args(&[""]).fails().stdout_has("Empty command");
}

#[test]
fn unterminated_quote_fails() {
    cli().args(&["echo 'open"]).fails().stdout_has("Invalid command: ");
}

#[test]
fn failure_section_is_tagged_with_display_name() {
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("check.sh");
    std::fs::write(&script, "echo problem >&2\nexit 1\n").unwrap();

    cli()
        .args(&["sh check.sh"])
        .current_dir(dir.path())
        .fails()
        .stdout_has("\n<check.sh>\n❌ check.sh:\nproblem\n</check.sh>\n");
}

#[test]
fn exact_report_without_time() {
    cli()
        .args(&["-t", "echo a", "sh -c 'exit 2'"])
        .fails()
        .stdout_eq(
            "\nRunning: echo a, -c 'exit 2'\n\
             \n\
             ✅ echo a\n\
             ❌ -c 'exit 2'\n\
             Summary: 1/2 passed\n\
             \n\
             <-c 'exit 2'>\n\
             ❌ -c 'exit 2':\n\
             </-c 'exit 2'>\n\
             \n\
             \n",
        );
}

#[test]
fn results_are_printed_in_argument_order() {
    let run = cli()
        .args(&["-t", "-n", "3", "sleep 0.3", "sleep 0.01", "sleep 0.1"])
        .passes();
    let stdout = run.stdout();
    let a = stdout.find("✅ sleep 0.3").unwrap();
    let b = stdout.find("✅ sleep 0.01").unwrap();
    let c = stdout.find("✅ sleep 0.1\n").unwrap();
    assert!(a < b && b < c, "out of order:\n{stdout}");
}

#[test]
fn commands_run_in_parallel() {
    let start = Instant::now();
    cli().args(&["-n", "3", "sleep 0.3", "sleep 0.3", "sleep 0.3"]).passes();
    assert!(
        start.elapsed() < Duration::from_millis(850),
        "took {:?}",
        start.elapsed()
    );
}

#[test]
fn single_thread_runs_sequentially() {
    let start = Instant::now();
    cli().args(&["-n", "1", "sleep 0.2", "sleep 0.2", "sleep 0.2"]).passes();
    assert!(start.elapsed() >= Duration::from_millis(590));
}

#[test]
fn huge_thread_limit_still_runs() {
    cli()
        .args(&["-n", "9223372036854775807", "echo hi"])
        .passes()
        .stdout_has("✅ echo hi")
        .stdout_has("Summary: 1/1 passed");
}
