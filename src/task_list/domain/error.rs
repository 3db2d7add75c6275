//! Error types for task list domain validation and parsing.

use super::TaskId;
use thiserror::Error;

/// Error returned when a task label is empty after trimming.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("task label must not be empty")]
pub struct EmptyLabelError;

/// Error returned when appending a task whose label already exists.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("duplicate task label: {0}")]
pub struct DuplicateLabelError(pub String);

/// Errors detected while validating a persisted task list snapshot.
///
/// A snapshot that violates either uniqueness invariant counts as malformed;
/// the loading service falls back to an empty list rather than surfacing it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SnapshotIntegrityError {
    /// Two persisted tasks share a label.
    #[error("snapshot contains duplicate task label: {0}")]
    DuplicateLabel(String),

    /// Two persisted tasks share an identifier.
    #[error("snapshot contains duplicate task identifier: {0}")]
    DuplicateId(TaskId),
}

/// Error returned while parsing move directions from user input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown move direction: {0}")]
pub struct ParseDirectionError(pub String);
