// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! aifr-engine: runs commands as subprocesses under a concurrency cap.
//!
//! [`Executor`] runs a single command in buffered or streamed mode and
//! always yields a [`CommandResult`](aifr_core::CommandResult).
//! [`Runner`] fans a batch out across tasks gated by a semaphore and
//! returns results in input order.

mod capture;
pub mod error;
pub mod executor;
pub mod pool;
pub mod runner;

pub use error::ExecError;
pub use executor::Executor;
pub use pool::{BufferPool, PooledBuffer, MAX_POOLED_BUFFERS, MAX_RETAINED_CAPACITY};
pub use runner::Runner;
