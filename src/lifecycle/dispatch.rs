//! Signal wait and hook fan-out.
//!
//! # Data Flow
//! ```text
//! wait_for_signal: SignalSource → first signal matching the filter
//! run_hooks:       snapshot → JoinSet (one blocking task per hook)
//!                  → join every task, while ignoring further signals
//! ```

use std::collections::HashMap;
use std::time::Instant;

use serde::Serialize;
use tokio::task::JoinSet;

use crate::lifecycle::error::ShutdownError;
use crate::lifecycle::hook::Hook;
use crate::lifecycle::signals::{Signal, SignalSet, SignalSource};

/// Outcome of one shutdown pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DrainSummary {
    /// Signal every hook was invoked with.
    pub signal: Signal,
    /// Hooks that returned normally.
    pub completed: usize,
    /// Hooks that panicked.
    pub failed: usize,
    /// Matching signals that arrived while hooks were still running.
    pub ignored: usize,
}

impl DrainSummary {
    pub fn total(&self) -> usize {
        self.completed + self.failed
    }
}

/// Block until `source` delivers a signal accepted by `filter`.
pub async fn wait_for_signal<S: SignalSource>(
    source: &mut S,
    filter: &SignalSet,
) -> Result<Signal, ShutdownError> {
    loop {
        match source.recv().await {
            Some(signal) if filter.matches(signal) => return Ok(signal),
            Some(signal) => tracing::debug!(%signal, "Signal outside the filter, still waiting"),
            None => return Err(ShutdownError::SourceClosed),
        }
    }
}

/// Invoke every hook with `signal` concurrently and wait for all of them.
///
/// There is no timeout: a hook that never returns keeps this pending forever.
/// `source` keeps being drained so repeated signals are logged and dropped
/// rather than left queued for the next pass.
pub async fn run_hooks<S: SignalSource>(
    hooks: HashMap<String, Hook>,
    signal: Signal,
    source: &mut S,
    filter: &SignalSet,
) -> DrainSummary {
    let started = Instant::now();
    let mut summary = DrainSummary {
        signal,
        completed: 0,
        failed: 0,
        ignored: 0,
    };

    tracing::info!(%signal, hooks = hooks.len(), "Running shutdown hooks");

    let mut tasks = JoinSet::new();
    for (key, hook) in hooks {
        tasks.spawn_blocking(move || {
            hook(signal);
            key
        });
    }

    let mut source_open = true;
    loop {
        tokio::select! {
            joined = tasks.join_next() => match joined {
                Some(Ok(key)) => {
                    summary.completed += 1;
                    tracing::debug!(%key, "Shutdown hook finished");
                }
                Some(Err(e)) => {
                    summary.failed += 1;
                    tracing::error!(error = %e, "Shutdown hook failed");
                }
                None => break,
            },
            received = source.recv(), if source_open => match received {
                Some(again) if filter.matches(again) => {
                    summary.ignored += 1;
                    tracing::warn!(signal = %again, "Shutdown already in progress, ignoring signal");
                }
                Some(_) => {}
                None => source_open = false,
            },
        }
    }

    tracing::info!(
        %signal,
        completed = summary.completed,
        failed = summary.failed,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Shutdown hooks drained"
    );
    summary
}
