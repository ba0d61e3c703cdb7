// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::builder::styling::{AnsiColor, Color, Style, Styles};
use std::io::IsTerminal;

use crate::env;

pub mod codes {
    pub const GREEN: &str = "\x1b[32m";
    pub const RED: &str = "\x1b[31m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

/// Determine if color output should be enabled.
///
/// Priority: `NO_COLOR=1` disables → `COLOR=1` forces → TTY check.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

/// Build clap `Styles` matching the report palette.
pub fn styles() -> Styles {
    if !should_colorize() {
        return Styles::plain();
    }
    Styles::styled()
        .header(Style::new().bold().underline())
        .usage(Style::new().bold().underline())
        .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
        .placeholder(Style::new().dimmed())
        .error(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold())
}

fn paint(code: &str, text: &str, enabled: bool) -> String {
    if enabled {
        format!("{code}{text}{}", codes::RESET)
    } else {
        text.to_string()
    }
}

/// Success color.
pub fn green(text: &str, enabled: bool) -> String {
    paint(codes::GREEN, text, enabled)
}

/// Failure color.
pub fn red(text: &str, enabled: bool) -> String {
    paint(codes::RED, text, enabled)
}

/// Timings and other secondary text.
pub fn dim(text: &str, enabled: bool) -> String {
    paint(codes::DIM, text, enabled)
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
