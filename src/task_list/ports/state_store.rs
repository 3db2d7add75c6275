//! State store port for key-value persistence of serialised task lists.

use std::sync::Arc;
use thiserror::Error;

/// Result type for state store operations.
pub type StateStoreResult<T> = Result<T, StateStoreError>;

/// Synchronous string key-value persistence contract.
///
/// The task list store uses exactly one key; the port stays key-generic so
/// adapters can be reused and substituted with in-memory fakes in tests.
pub trait StateStore: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// Returns `None` when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns [`StateStoreError`] when the backend cannot be read.
    fn get(&self, key: &str) -> StateStoreResult<Option<String>>;

    /// Stores `value` under `key`, overwriting any prior content.
    ///
    /// # Errors
    ///
    /// Returns [`StateStoreError::CapacityExceeded`] when the backend is full
    /// or [`StateStoreError::Backend`] when the write fails.
    fn set(&self, key: &str, value: &str) -> StateStoreResult<()>;
}

/// Errors returned by state store implementations.
#[derive(Debug, Clone, Error)]
pub enum StateStoreError {
    /// The backend refused the write because it is out of space.
    #[error("storage capacity exceeded for key '{0}'")]
    CapacityExceeded(String),

    /// Backend-layer failure.
    #[error("storage backend error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl StateStoreError {
    /// Wraps a backend error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
