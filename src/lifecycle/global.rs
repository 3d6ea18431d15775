//! Process-wide default instance.
//!
//! Each function delegates to one [`Shutdown`] created on first use and kept
//! for the lifetime of the process.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::lifecycle::dispatch::DrainSummary;
use crate::lifecycle::error::ShutdownError;
use crate::lifecycle::hook::Hook;
use crate::lifecycle::shutdown::Shutdown;
use crate::lifecycle::signals::{Signal, SignalSet, SignalSource};

static DEFAULT: OnceLock<Shutdown> = OnceLock::new();

/// The instance used by the free functions.
pub fn default_instance() -> &'static Shutdown {
    DEFAULT.get_or_init(Shutdown::new)
}

/// See [`Shutdown::add`].
pub fn add<F>(f: F) -> String
where
    F: Fn() + Send + Sync + 'static,
{
    default_instance().add(f)
}

/// See [`Shutdown::add_with_key`].
pub fn add_with_key<F>(key: impl Into<String>, f: F)
where
    F: Fn() + Send + Sync + 'static,
{
    default_instance().add_with_key(key, f)
}

/// See [`Shutdown::add_with_param`].
pub fn add_with_param<F>(f: F) -> String
where
    F: Fn(Signal) + Send + Sync + 'static,
{
    default_instance().add_with_param(f)
}

/// See [`Shutdown::add_with_key_with_param`].
pub fn add_with_key_with_param<F>(key: impl Into<String>, f: F)
where
    F: Fn(Signal) + Send + Sync + 'static,
{
    default_instance().add_with_key_with_param(key, f)
}

/// See [`Shutdown::hooks`].
pub fn hooks() -> HashMap<String, Hook> {
    default_instance().hooks()
}

/// See [`Shutdown::remove`].
pub fn remove(key: &str) {
    default_instance().remove(key)
}

/// See [`Shutdown::reset`].
pub fn reset() {
    default_instance().reset()
}

/// See [`Shutdown::listen`].
pub async fn listen(signals: &[Signal]) -> Result<DrainSummary, ShutdownError> {
    default_instance().listen(signals).await
}

/// See [`Shutdown::listen_with`].
pub async fn listen_with<S: SignalSource>(
    source: S,
    filter: impl Into<SignalSet>,
) -> Result<DrainSummary, ShutdownError> {
    default_instance().listen_with(source, filter).await
}
