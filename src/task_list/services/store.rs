//! Task list store: intent handling and persistence mirroring.

use log::warn;
use thiserror::Error;

use crate::task_list::{
    domain::{IdSequence, MoveDirection, Task, TaskLabel, TaskList},
    ports::StateStore,
};

/// Fixed storage key holding the serialised task list.
pub const STORAGE_KEY: &str = "tasks";

/// Errors surfaced to the user on a rejected submission.
///
/// `Display` renders the exact message the view shows.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// The submitted text was blank or whitespace-only.
    #[error("You didn't enter anything. Please enter your task.")]
    EmptyInput,

    /// The submitted text matches an existing task label exactly.
    #[error("'{0}' already exists. Try again.")]
    DuplicateLabel(String),
}

/// Ordered task list state with persistence mirroring.
///
/// Every intent is handled synchronously: the in-memory list mutates first,
/// then the full list is re-serialised to the store under [`STORAGE_KEY`].
/// Persistence is best-effort: a failed write leaves in-memory state
/// authoritative for the session and is logged rather than surfaced, so the
/// persisted snapshot may lag until the next successful write.
pub struct TaskListStore<S: StateStore> {
    store: S,
    tasks: TaskList,
    ids: IdSequence,
    pending_input: String,
    last_error: Option<SubmitError>,
}

impl<S: StateStore> TaskListStore<S> {
    /// Loads the task list from `store`.
    ///
    /// An absent key, an unreadable backend, and an unparseable snapshot all
    /// degrade to an empty list; loading never fails. The identifier
    /// sequence resumes past the highest persisted identifier.
    #[must_use]
    pub fn load(store: S) -> Self {
        let tasks = match store.get(STORAGE_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                warn!("discarding malformed snapshot under '{STORAGE_KEY}': {err}");
                TaskList::new()
            }),
            Ok(None) => TaskList::new(),
            Err(err) => {
                warn!("treating unreadable snapshot under '{STORAGE_KEY}' as absent: {err}");
                TaskList::new()
            }
        };
        let ids = IdSequence::resume_after(tasks.highest_id());
        Self {
            store,
            tasks,
            ids,
            pending_input: String::new(),
            last_error: None,
        }
    }

    /// Returns the tasks in display order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        self.tasks.tasks()
    }

    /// Returns the last submit error, if any.
    #[must_use]
    pub const fn last_error(&self) -> Option<&SubmitError> {
        self.last_error.as_ref()
    }

    /// Returns the user-visible error message; empty means no error.
    #[must_use]
    pub fn error_message(&self) -> String {
        self.last_error
            .as_ref()
            .map_or_else(String::new, ToString::to_string)
    }

    /// Returns the pending input text.
    #[must_use]
    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    /// Replaces the pending input text as the user types.
    pub fn set_pending_input(&mut self, text: impl Into<String>) {
        self.pending_input = text.into();
    }

    /// Handles the add intent.
    ///
    /// Trims `raw_input` and appends a task with a freshly allocated
    /// identifier. A blank submission keeps the pending input so the user
    /// can correct it; a duplicate clears it, as does success. The list is
    /// persisted only on success.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::EmptyInput`] or
    /// [`SubmitError::DuplicateLabel`]; both are also recorded as the
    /// visible error state.
    pub fn submit(&mut self, raw_input: &str) -> Result<Task, SubmitError> {
        let Ok(label) = TaskLabel::new(raw_input) else {
            return Err(self.reject(SubmitError::EmptyInput, false));
        };
        match self.tasks.append(label, &mut self.ids) {
            Ok(task) => {
                self.pending_input.clear();
                self.last_error = None;
                self.persist();
                Ok(task)
            }
            Err(duplicate) => {
                Err(self.reject(SubmitError::DuplicateLabel(duplicate.0), true))
            }
        }
    }

    /// Handles the delete intent: removes and returns the task at `index`.
    ///
    /// Out-of-range indices are a silent no-op. Does not touch the error
    /// state; persists only when a task was actually removed.
    pub fn remove(&mut self, index: usize) -> Option<Task> {
        let removed = self.tasks.remove(index)?;
        self.persist();
        Some(removed)
    }

    /// Handles the move intent: swaps the task at `index` with its
    /// neighbour in `direction`.
    ///
    /// Boundary and out-of-range requests are silent no-ops; persists only
    /// after an actual swap. Returns whether a swap took place.
    pub fn move_task(&mut self, index: usize, direction: MoveDirection) -> bool {
        let moved = self.tasks.shift(index, direction);
        if moved {
            self.persist();
        }
        moved
    }

    /// Records a rejected submission, clearing the pending input for the
    /// branches whose contract requires it.
    fn reject(&mut self, error: SubmitError, clear_input: bool) -> SubmitError {
        if clear_input {
            self.pending_input.clear();
        }
        self.last_error = Some(error.clone());
        error
    }

    /// Re-serialises the full list to the store, logging failures instead of
    /// surfacing them.
    fn persist(&self) {
        let snapshot = match serde_json::to_string(&self.tasks) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!("failed to serialise task list: {err}");
                return;
            }
        };
        if let Err(err) = self.store.set(STORAGE_KEY, &snapshot) {
            warn!("failed to persist task list under '{STORAGE_KEY}': {err}");
        }
    }
}
