//! Tasklist: persistent to-do list state management.
//!
//! This crate provides the state core of a task list editor: users add,
//! remove, and reorder short text tasks, and every mutation is mirrored to a
//! pluggable key-value store so the list survives across sessions.
//!
//! # Architecture
//!
//! Tasklist follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (memory, filesystem)
//!
//! # Modules
//!
//! - [`task_list`]: the ordered task collection, validation, and persistence

pub mod task_list;
