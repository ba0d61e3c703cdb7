// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bounded-concurrency batch runner.
//!
//! Every command gets its own task immediately; a semaphore sized to the
//! concurrency limit decides which of them may be inside the executor at
//! any moment. Results are joined in spawn order, so slot `i` always holds
//! the outcome of `commands[i]`.

use std::sync::Arc;
use std::time::Duration;

use aifr_core::{CommandResult, ExecutionConfig};
use tokio::sync::Semaphore;
use tokio_util::sync::CancellationToken;

use crate::executor::Executor;

/// Runs a batch of commands under a shared admission gate.
#[derive(Debug, Clone, Default)]
pub struct Runner {
    executor: Executor,
}

impl Runner {
    /// Run every command and return one result per command, in input order.
    ///
    /// Returns only after all tasks have finished. Tasks still waiting for
    /// admission when `cancel` fires resolve to a "Cancelled by user" result
    /// without spawning anything.
    pub async fn run_all(
        &self,
        commands: &[String],
        config: &ExecutionConfig,
        cancel: &CancellationToken,
    ) -> Vec<CommandResult> {
        // Semaphore::new panics above MAX_PERMITS.
        let permits =
            config.concurrency.get().min(commands.len().max(1)).min(Semaphore::MAX_PERMITS);
        let gate = Arc::new(Semaphore::new(permits));
        let config = Arc::new(config.clone());

        tracing::debug!(commands = commands.len(), permits, "dispatching batch");

        let mut handles = Vec::with_capacity(commands.len());
        for (index, command) in commands.iter().enumerate() {
            let gate = Arc::clone(&gate);
            let config = Arc::clone(&config);
            let cancel = cancel.clone();
            let executor = self.executor.clone();
            let command = command.clone();

            handles.push(tokio::spawn(async move {
                let permit = tokio::select! {
                    biased;
                    _ = cancel.cancelled() => None,
                    permit = gate.acquire_owned() => permit.ok(),
                };
                let Some(_permit) = permit else {
                    tracing::debug!(index, cmd = %command, "cancelled before admission");
                    return CommandResult::cancelled(command);
                };
                executor.execute(&command, &config, &cancel).await
            }));
        }

        let mut results = Vec::with_capacity(handles.len());
        for (handle, command) in handles.into_iter().zip(commands) {
            match handle.await {
                Ok(result) => results.push(result),
                Err(e) => {
                    tracing::error!(cmd = %command, error = %e, "command task failed");
                    results.push(CommandResult::failure(
                        command.as_str(),
                        Duration::ZERO,
                        format!("Command task failed: {e}"),
                    ));
                }
            }
        }
        results
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
