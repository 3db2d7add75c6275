//! Identifier and validated scalar types for the task list domain.

use super::EmptyLabelError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a task record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Creates a task identifier from a raw numeric value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonically increasing allocator for [`TaskId`] values.
///
/// Identifiers are counter-allocated rather than derived from the creation
/// timestamp: two tasks created within the same clock tick would collide,
/// whereas a counter cannot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    /// Creates a sequence that starts allocating at `next`.
    #[must_use]
    pub const fn starting_at(next: u64) -> Self {
        Self { next }
    }

    /// Creates a sequence that continues after the given highest identifier.
    ///
    /// Seeding from the highest persisted identifier keeps identifiers unique
    /// across sessions against the same store.
    #[must_use]
    pub fn resume_after(highest: Option<TaskId>) -> Self {
        Self::starting_at(highest.map_or(1, |id| id.value().saturating_add(1)))
    }

    /// Allocates the next identifier.
    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId::new(self.next);
        self.next = self.next.saturating_add(1);
        id
    }
}

/// Validated task label.
///
/// Labels are trimmed on construction and must be non-empty afterwards.
/// Comparison is exact and case-sensitive with no further normalisation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskLabel(String);

impl TaskLabel {
    /// Creates a validated label from raw user input.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyLabelError`] when the value is empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, EmptyLabelError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(EmptyLabelError);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the label as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TaskLabel {
    type Error = EmptyLabelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaskLabel> for String {
    fn from(label: TaskLabel) -> Self {
        label.0
    }
}

impl AsRef<str> for TaskLabel {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
