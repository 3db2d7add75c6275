//! Port contracts for task list persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by the task list
//! store.

pub mod state_store;

pub use state_store::{StateStore, StateStoreError, StateStoreResult};
