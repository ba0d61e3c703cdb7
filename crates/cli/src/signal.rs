// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Interrupt handling.

use tokio_util::sync::CancellationToken;

/// Cancel `token` on the first SIGINT or SIGTERM.
///
/// Children run in their own process groups, so a terminal Ctrl-C only
/// reaches them through this token.
pub fn spawn_cancel_on_signal(token: CancellationToken) {
    tokio::spawn(async move {
        #[cfg(unix)]
        {
            use tokio::signal::unix::{signal, SignalKind};
            let mut sigterm = match signal(SignalKind::terminate()) {
                Ok(sigterm) => sigterm,
                Err(e) => {
                    tracing::warn!(error = %e, "SIGTERM handler unavailable");
                    if tokio::signal::ctrl_c().await.is_ok() {
                        token.cancel();
                    }
                    return;
                }
            };
            tokio::select! {
                _ = token.cancelled() => return,
                res = tokio::signal::ctrl_c() => {
                    if res.is_err() {
                        return;
                    }
                    tracing::info!("interrupted, cancelling batch");
                }
                _ = sigterm.recv() => tracing::info!("terminated, cancelling batch"),
            }
            token.cancel();
        }
        #[cfg(not(unix))]
        {
            tokio::select! {
                _ = token.cancelled() => {}
                res = tokio::signal::ctrl_c() => {
                    if res.is_ok() {
                        tracing::info!("interrupted, cancelling batch");
                        token.cancel();
                    }
                }
            }
        }
    });
}
