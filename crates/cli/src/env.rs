// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI.

use std::time::Duration;

use aifr_core::DEFAULT_TERMINATION_GRACE;

/// Version string shown by `--version`.
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("AIFR_BUILD_HASH"), ")");

/// Default log filter when `AIFR_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// `tracing` filter directives: `AIFR_LOG` > "warn".
pub fn log_filter() -> String {
    std::env::var("AIFR_LOG")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

/// How long a cancelled command gets between SIGTERM and SIGKILL
/// (default 5s, configurable via `AIFR_TERMINATION_GRACE_MS`).
pub fn termination_grace() -> Duration {
    std::env::var("AIFR_TERMINATION_GRACE_MS")
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_TERMINATION_GRACE)
}

pub fn no_color() -> bool {
    std::env::var("NO_COLOR").is_ok_and(|v| v == "1")
}

pub fn force_color() -> bool {
    std::env::var("COLOR").is_ok_and(|v| v == "1")
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
