//! Application services for task list state management.

mod store;

pub use store::{STORAGE_KEY, SubmitError, TaskListStore};
