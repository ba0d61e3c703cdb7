// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Batch report rendering.
//!
//! The layout is line-oriented and tagged so that both people and log
//! readers can pick out each command's section:
//!
//! ```text
//!
//! ✅ lint:eslint (120ms)
//! ❌ test (340ms)
//! Summary: 1/2 passed
//! Total time: 340ms
//!
//! <test>
//! ❌ test:
//! ...captured stderr, then stdout...
//! </test>
//!
//! ```

use std::io::{self, Write};

use aifr_core::{display_name, CommandResult, ExecutionConfig, OutputMode};

use crate::color;

const PASS: &str = "✅";
const FAIL: &str = "❌";

/// Print the `Running: ...` banner shown before anything is scheduled.
pub fn announce(commands: &[String]) -> io::Result<()> {
    let mut out = io::stdout().lock();
    out.write_all(announce_line(commands).as_bytes())?;
    out.flush()
}

pub fn announce_line(commands: &[String]) -> String {
    let names: Vec<&str> = commands.iter().map(|c| display_name(c)).collect();
    format!("\nRunning: {}\n", names.join(", "))
}

/// Render the report for `results` to stdout.
pub fn print_report(results: &[CommandResult], config: &ExecutionConfig) -> io::Result<()> {
    let colors = color::should_colorize();
    let mut out = io::stdout().lock();
    write_report(&mut out, results, config, colors)?;
    out.flush()
}

pub fn write_report<W: Write>(
    out: &mut W,
    results: &[CommandResult],
    config: &ExecutionConfig,
    colors: bool,
) -> io::Result<()> {
    if config.output == OutputMode::Silent || results.is_empty() {
        return Ok(());
    }

    writeln!(out)?;

    for result in results {
        let name = display_name(&result.command);
        let line = status_line(result, name, config.show_time, colors);
        if result.is_success && config.output == OutputMode::Full {
            writeln!(out, "<{name}>")?;
            writeln!(out, "{line}")?;
            write_captured(out, &result.stdout)?;
            write_captured(out, &result.stderr)?;
            writeln!(out, "</{name}>")?;
        } else {
            writeln!(out, "{line}")?;
        }
    }

    let passed = results.iter().filter(|r| r.is_success).count();
    let total = results.len();

    if config.show_summary {
        let summary = format!("Summary: {passed}/{total} passed");
        let summary = if passed == total {
            color::green(&summary, colors)
        } else {
            color::red(&summary, colors)
        };
        writeln!(out, "{summary}")?;
    }

    if config.show_time {
        let max = results.iter().map(CommandResult::duration_ms).max().unwrap_or(0);
        writeln!(out, "{}", color::dim(&format!("Total time: {max}ms"), colors))?;
    }

    if passed < total {
        writeln!(out)?;
        for result in results.iter().filter(|r| !r.is_success) {
            let name = display_name(&result.command);
            writeln!(out, "<{name}>")?;
            writeln!(out, "{} {name}:", color::red(FAIL, colors))?;
            write_captured(out, &result.stderr)?;
            write_captured(out, &result.stdout)?;
            writeln!(out, "</{name}>")?;
            writeln!(out)?;
        }
    }

    writeln!(out)
}

fn status_line(result: &CommandResult, name: &str, show_time: bool, colors: bool) -> String {
    let glyph = if result.is_success {
        color::green(PASS, colors)
    } else {
        color::red(FAIL, colors)
    };
    if show_time {
        let time = color::dim(&format!("({}ms)", result.duration_ms()), colors);
        format!("{glyph} {name} {time}")
    } else {
        format!("{glyph} {name}")
    }
}

/// Write captured output verbatim, closing an unterminated last line.
fn write_captured<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    if text.is_empty() {
        return Ok(());
    }
    out.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
