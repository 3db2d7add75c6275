//! Task records and the ordered task list aggregate.

use super::{
    DuplicateLabelError, IdSequence, ParseDirectionError, SnapshotIntegrityError, TaskId,
    TaskLabel,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single to-do entry.
///
/// Tasks are immutable once created; identity is the `id` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    label: TaskLabel,
}

impl Task {
    /// Creates a task from an identifier and a validated label.
    #[must_use]
    pub const fn new(id: TaskId, label: TaskLabel) -> Self {
        Self { id, label }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task label.
    #[must_use]
    pub const fn label(&self) -> &TaskLabel {
        &self.label
    }
}

/// Direction for moving a task one position within the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    /// Swap the task with its predecessor.
    Up,
    /// Swap the task with its successor.
    Down,
}

impl MoveDirection {
    /// Returns the canonical textual representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl TryFrom<&str> for MoveDirection {
    type Error = ParseDirectionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            _ => Err(ParseDirectionError(value.to_owned())),
        }
    }
}

/// Ordered task collection.
///
/// Display order is the sole ordering key. No two tasks share a label or an
/// identifier; deserialisation validates both invariants, so a snapshot that
/// violates them fails to parse. The serialised form is a plain array of
/// `{id, label}` records in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Task>", into = "Vec<Task>")]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Reconstructs a list from persisted tasks, validating uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotIntegrityError`] when two tasks share an identifier
    /// or a label.
    pub fn from_tasks(tasks: Vec<Task>) -> Result<Self, SnapshotIntegrityError> {
        let mut seen_ids = HashSet::new();
        let mut seen_labels = HashSet::new();
        for task in &tasks {
            if !seen_ids.insert(task.id()) {
                return Err(SnapshotIntegrityError::DuplicateId(task.id()));
            }
            if !seen_labels.insert(task.label().as_str().to_owned()) {
                return Err(SnapshotIntegrityError::DuplicateLabel(
                    task.label().as_str().to_owned(),
                ));
            }
        }
        Ok(Self { tasks })
    }

    /// Returns the tasks in display order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns whether a task with exactly this label exists.
    #[must_use]
    pub fn contains_label(&self, label: &str) -> bool {
        self.tasks.iter().any(|task| task.label().as_str() == label)
    }

    /// Returns the highest identifier currently in the list.
    #[must_use]
    pub fn highest_id(&self) -> Option<TaskId> {
        self.tasks.iter().map(Task::id).max()
    }

    /// Appends a task with the next identifier from `ids`.
    ///
    /// The identifier is allocated only when the append succeeds, so a
    /// rejected label does not consume a sequence value.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateLabelError`] when a task with the same label
    /// already exists.
    pub fn append(
        &mut self,
        label: TaskLabel,
        ids: &mut IdSequence,
    ) -> Result<Task, DuplicateLabelError> {
        if self.contains_label(label.as_str()) {
            return Err(DuplicateLabelError(label.as_str().to_owned()));
        }
        let task = Task::new(ids.next_id(), label);
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Removes and returns the task at `index`.
    ///
    /// Subsequent tasks shift up by one position. Out-of-range indices are a
    /// silent no-op returning `None`.
    pub fn remove(&mut self, index: usize) -> Option<Task> {
        if index >= self.tasks.len() {
            return None;
        }
        Some(self.tasks.remove(index))
    }

    /// Swaps the task at `index` one position in `direction`.
    ///
    /// Boundary and out-of-range requests are silent no-ops. Returns whether
    /// a swap took place.
    pub fn shift(&mut self, index: usize, direction: MoveDirection) -> bool {
        let neighbour = match direction {
            MoveDirection::Up => {
                if index == 0 || index >= self.tasks.len() {
                    return false;
                }
                index - 1
            }
            MoveDirection::Down => {
                let Some(next) = index.checked_add(1) else {
                    return false;
                };
                if next >= self.tasks.len() {
                    return false;
                }
                next
            }
        };
        self.tasks.swap(index, neighbour);
        true
    }
}

impl TryFrom<Vec<Task>> for TaskList {
    type Error = SnapshotIntegrityError;

    fn try_from(tasks: Vec<Task>) -> Result<Self, Self::Error> {
        Self::from_tasks(tasks)
    }
}

impl From<TaskList> for Vec<Task> {
    fn from(list: TaskList) -> Self {
        list.tasks
    }
}
