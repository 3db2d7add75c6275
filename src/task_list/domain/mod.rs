//! Domain model for task list state management.
//!
//! The domain models an ordered collection of short text tasks with
//! validated labels, counter-allocated identifiers, and the uniqueness
//! invariants a persisted snapshot must satisfy, while keeping all
//! infrastructure concerns outside of the domain boundary.

mod error;
mod ids;
mod task;

pub use error::{
    DuplicateLabelError, EmptyLabelError, ParseDirectionError, SnapshotIntegrityError,
};
pub use ids::{IdSequence, TaskId, TaskLabel};
pub use task::{MoveDirection, Task, TaskList};
