//! In-memory state store for tests and ephemeral sessions.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task_list::ports::{StateStore, StateStoreError, StateStoreResult};

/// Thread-safe in-memory key-value store.
///
/// Clones share the same underlying map, so a clone handed to a store under
/// test can be inspected afterwards. An optional byte capacity mirrors the
/// quota behaviour of browser-style storage: writes that would push the
/// total stored value size past the limit fail with
/// [`StateStoreError::CapacityExceeded`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryStateStore {
    state: Arc<RwLock<HashMap<String, String>>>,
    capacity_bytes: Option<usize>,
}

impl InMemoryStateStore {
    /// Creates an unbounded in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that rejects writes once `capacity_bytes` of values
    /// would be stored.
    #[must_use]
    pub fn with_capacity_limit(capacity_bytes: usize) -> Self {
        Self {
            state: Arc::default(),
            capacity_bytes: Some(capacity_bytes),
        }
    }
}

impl StateStore for InMemoryStateStore {
    fn get(&self, key: &str) -> StateStoreResult<Option<String>> {
        let state = self
            .state
            .read()
            .map_err(|err| StateStoreError::backend(std::io::Error::other(err.to_string())))?;
        Ok(state.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StateStoreResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| StateStoreError::backend(std::io::Error::other(err.to_string())))?;
        if let Some(limit) = self.capacity_bytes {
            // An overwrite is measured against the replacement value, not
            // the sum of old and new.
            let occupied: usize = state
                .iter()
                .filter(|(stored_key, _)| stored_key.as_str() != key)
                .map(|(_, stored)| stored.len())
                .sum();
            if occupied.saturating_add(value.len()) > limit {
                return Err(StateStoreError::CapacityExceeded(key.to_owned()));
            }
        }
        state.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
