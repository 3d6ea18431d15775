//! Hook representation.

use std::sync::Arc;

use crate::lifecycle::signals::Signal;

/// A cleanup routine run when shutdown is triggered.
///
/// Every hook receives the signal that triggered the shutdown. Routines
/// that do not care about it are wrapped by [`hook`].
pub type Hook = Arc<dyn Fn(Signal) + Send + Sync + 'static>;

/// Lift a routine without arguments into a [`Hook`] that ignores the signal.
pub fn hook<F>(f: F) -> Hook
where
    F: Fn() + Send + Sync + 'static,
{
    Arc::new(move |_signal| f())
}

/// Wrap a signal-aware routine as a [`Hook`].
pub fn param_hook<F>(f: F) -> Hook
where
    F: Fn(Signal) + Send + Sync + 'static,
{
    Arc::new(f)
}
