//! Filesystem adapters for durable task list persistence.

mod state_store;

pub use state_store::DirStateStore;
