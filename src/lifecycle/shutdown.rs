//! Shutdown coordination.

use std::collections::HashMap;

use crate::lifecycle::dispatch::{self, DrainSummary};
use crate::lifecycle::error::ShutdownError;
use crate::lifecycle::hook::{self, Hook};
use crate::lifecycle::key::random_key;
use crate::lifecycle::registry::HookRegistry;
use crate::lifecycle::signals::{OsSignals, Signal, SignalSet, SignalSource};

/// Coordinator for graceful shutdown.
///
/// Holds a set of keyed hooks. [`Shutdown::listen`] waits for a termination
/// signal and then runs every hook concurrently, returning once all of them
/// have finished. Instances are independent of each other; the free
/// functions at the crate root use a process-wide one.
///
/// ```no_run
/// # async fn run() -> Result<(), shutdown_hooks::ShutdownError> {
/// use shutdown_hooks::{Shutdown, Signal};
///
/// let shutdown = Shutdown::new();
/// shutdown.add(|| println!("closing connections"));
/// shutdown.add_with_param(|sig: Signal| println!("stopping on {}", sig));
///
/// shutdown.listen(&[Signal::Interrupt, Signal::Terminate]).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct Shutdown {
    registry: HookRegistry,
}

impl Shutdown {
    /// Create a coordinator with no hooks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a hook and return the key it was stored under.
    pub fn add<F>(&self, f: F) -> String
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.add_hook(hook::hook(f))
    }

    /// Add a hook under `key`, replacing any hook already stored there.
    pub fn add_with_key<F>(&self, key: impl Into<String>, f: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.registry.put(key.into(), hook::hook(f));
    }

    /// Add a hook that receives the triggering signal.
    pub fn add_with_param<F>(&self, f: F) -> String
    where
        F: Fn(Signal) + Send + Sync + 'static,
    {
        self.add_hook(hook::param_hook(f))
    }

    /// Add a signal-aware hook under `key`, replacing any hook already stored there.
    pub fn add_with_key_with_param<F>(&self, key: impl Into<String>, f: F)
    where
        F: Fn(Signal) + Send + Sync + 'static,
    {
        self.registry.put(key.into(), hook::param_hook(f));
    }

    fn add_hook(&self, hook: Hook) -> String {
        let key = random_key();
        self.registry.put(key.clone(), hook);
        key
    }

    /// Copy of the current hooks.
    pub fn hooks(&self) -> HashMap<String, Hook> {
        self.registry.snapshot()
    }

    /// Cancel the hook stored under `key`, if any.
    pub fn remove(&self, key: &str) {
        self.registry.remove(key);
    }

    /// Cancel all hooks.
    pub fn reset(&self) {
        self.registry.reset();
    }

    /// Wait for one of `signals` (any terminating signal if empty), then run
    /// every hook concurrently and wait for all of them.
    ///
    /// Fails only if the signal handlers cannot be installed.
    pub async fn listen(&self, signals: &[Signal]) -> Result<DrainSummary, ShutdownError> {
        let filter = SignalSet::from(signals);
        let source = OsSignals::subscribe(&filter)?;
        self.listen_with(source, filter).await
    }

    /// Same as [`Shutdown::listen`], with signals coming from `source`.
    pub async fn listen_with<S: SignalSource>(
        &self,
        mut source: S,
        filter: impl Into<SignalSet>,
    ) -> Result<DrainSummary, ShutdownError> {
        let filter = filter.into();
        tracing::info!(signals = ?filter.kinds(), "Waiting for shutdown signal");

        let signal = dispatch::wait_for_signal(&mut source, &filter).await?;
        tracing::info!(%signal, "Shutdown signal received");

        let hooks = self.hooks();
        Ok(dispatch::run_hooks(hooks, signal, &mut source, &filter).await)
    }
}
