// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Display names for commands.
//!
//! Package-manager and shell launcher prefixes add noise to reports, so
//! `yarn lint:eslint` is shown as `lint:eslint`. This is cosmetic only:
//! the command that runs and the `command` field of a result keep the
//! original string.

/// Leading launcher tokens stripped for display. Each includes its
/// separating space so `yarnpkg` or a bare `yarn` is left alone.
pub const RUNNER_PREFIXES: &[&str] = &[
    "yarn ", "npm ", "pnpm ", "bun ", "npx ", "pnpx ", "bunx ", "bash ", "sh ", "zsh ", "fish ",
];

/// Strip at most one known runner prefix from `command`.
pub fn display_name(command: &str) -> &str {
    for prefix in RUNNER_PREFIXES {
        if let Some(rest) = command.strip_prefix(prefix) {
            let rest = rest.trim_start();
            if !rest.is_empty() {
                return rest;
            }
        }
    }
    command
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
