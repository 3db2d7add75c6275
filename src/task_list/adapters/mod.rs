//! Adapter implementations of the task list persistence port.

pub mod fs;
pub mod memory;
