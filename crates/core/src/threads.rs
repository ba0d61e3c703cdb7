// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::num::NonZeroUsize;

/// Default concurrency limit: one less than the CPU count, never below 1.
pub fn default_threads() -> NonZeroUsize {
    threads_for_cpus(num_cpus::get())
}

fn threads_for_cpus(cpus: usize) -> NonZeroUsize {
    NonZeroUsize::new(cpus.saturating_sub(1)).unwrap_or(NonZeroUsize::MIN)
}
