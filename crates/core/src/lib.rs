// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! aifr-core: data model shared by the aifr engine and CLI

pub mod config;
pub mod display;
pub mod result;
pub mod threads;

pub use config::{ExecMode, ExecutionConfig, OutputMode, DEFAULT_TERMINATION_GRACE};
pub use display::{display_name, RUNNER_PREFIXES};
pub use result::{all_passed, CommandResult, CANCELLED_MESSAGE};
pub use threads::default_threads;
