//! Shared utilities for integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use shutdown_hooks::Signal;

/// Counts how often each named hook ran and which signals it saw.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct HookLog {
    calls: Arc<Mutex<Vec<(String, Option<Signal>)>>>,
}

#[allow(dead_code)]
impl HookLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A no-arg hook that records `name`.
    pub fn plain(&self, name: &str) -> impl Fn() + Send + Sync + 'static {
        let calls = self.calls.clone();
        let name = name.to_string();
        move || calls.lock().unwrap().push((name.clone(), None))
    }

    /// A signal-aware hook that records `name` with the signal.
    pub fn aware(&self, name: &str) -> impl Fn(Signal) + Send + Sync + 'static {
        let calls = self.calls.clone();
        let name = name.to_string();
        move |sig| calls.lock().unwrap().push((name.clone(), Some(sig)))
    }

    pub fn count(&self, name: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(n, _)| n == name)
            .count()
    }

    pub fn signals(&self, name: &str) -> Vec<Signal> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(n, _)| n == name)
            .filter_map(|(_, sig)| *sig)
            .collect()
    }
}

/// A hook counter shared between a closure and the test body.
#[allow(dead_code)]
pub fn counter() -> (Arc<AtomicUsize>, impl Fn() + Send + Sync + 'static) {
    let count = Arc::new(AtomicUsize::new(0));
    let count_clone = count.clone();
    (count, move || {
        count_clone.fetch_add(1, Ordering::SeqCst);
    })
}
