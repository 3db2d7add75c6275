//! In-memory adapters for task list persistence.

mod state_store;

pub use state_store::InMemoryStateStore;
