//! Task record types for the `TermTodo` collection.
//!
//! A task is a short text item with a done flag. Each record also
//! carries a generated [`TaskId`] so that rows with identical text stay
//! distinguishable across the view/store boundary.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum allowed task text length in characters.
pub const MAX_TASK_TEXT_LENGTH: usize = 256;

/// Unique identifier for a task, based on UUID v7 for time-ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Creates a new time-ordered task identifier (UUID v7).
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Creates a `TaskId` from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID value.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single task in the collection.
///
/// Stored slots may predate the `id` and `done` fields (the original
/// slot format was plain `{text, done}` pairs); both fall back to serde
/// defaults on deserialization — a freshly generated id, and not done.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Unique task identifier (UUID v7, time-ordered).
    #[serde(default)]
    pub id: TaskId,
    /// The user-visible task text.
    pub text: String,
    /// Whether the task has been marked done.
    #[serde(default)]
    pub done: bool,
}

impl TaskRecord {
    /// Creates a new, not-done record with a fresh id.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: TaskId::new(),
            text: text.into(),
            done: false,
        }
    }
}

/// Returns whether `text` is acceptable for a record: non-empty and at
/// most [`MAX_TASK_TEXT_LENGTH`] characters.
#[must_use]
pub fn text_is_valid(text: &str) -> bool {
    !text.is_empty() && text.chars().count() <= MAX_TASK_TEXT_LENGTH
}
