//! Task list state management.
//!
//! Implements the core of a single-page task list editor: an ordered
//! in-memory collection with add, delete, and reorder intents, duplicate and
//! empty-input validation, and best-effort mirroring of every mutation to a
//! key-value state store so state survives across sessions. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The state store service in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
