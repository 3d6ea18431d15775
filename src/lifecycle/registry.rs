//! Keyed hook storage.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::lifecycle::hook::Hook;

/// Thread-safe map from key to hook.
///
/// Every operation takes the lock for the duration of a single map access.
/// Hooks are never invoked while the lock is held, so a poisoned lock still
/// guards a consistent map and is recovered instead of reported.
#[derive(Default)]
pub struct HookRegistry {
    hooks: Mutex<HashMap<String, Hook>>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Hook>> {
        self.hooks.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert a hook, replacing any hook already stored under `key`.
    pub fn put(&self, key: String, hook: Hook) {
        let replaced = self.lock().insert(key.clone(), hook).is_some();
        tracing::debug!(%key, replaced, "Shutdown hook registered");
    }

    /// Remove the hook stored under `key`. Missing keys are ignored.
    pub fn remove(&self, key: &str) {
        if self.lock().remove(key).is_some() {
            tracing::debug!(%key, "Shutdown hook removed");
        }
    }

    /// Remove every hook.
    pub fn reset(&self) {
        let mut hooks = self.lock();
        let removed = hooks.len();
        hooks.clear();
        drop(hooks);
        tracing::debug!(removed, "Shutdown hooks reset");
    }

    /// Point-in-time copy of all hooks.
    pub fn snapshot(&self) -> HashMap<String, Hook> {
        self.lock().clone()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.lock().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl std::fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let hooks = self.lock();
        f.debug_struct("HookRegistry")
            .field("keys", &hooks.keys().collect::<Vec<_>>())
            .finish()
    }
}
