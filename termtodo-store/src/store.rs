//! Task store: the canonical in-session collection and its mutations.
//!
//! `TaskStore` is the single source of truth for task records during a
//! session. Every mutation rewrites the full collection through the
//! persistence adapter; there is no incremental persistence.

use crate::persist::Persistence;
use crate::record::{TaskId, TaskRecord, text_is_valid};

/// Owns the ordered task collection and its persisted-storage effects.
///
/// Lookup misses and rejected input are silent no-ops: mutating
/// operations report whether anything changed, never an error. The
/// text-keyed operations resolve by first exact match, so two records
/// with identical text are addressed by collection order; the id-keyed
/// forms are unambiguous.
pub struct TaskStore<P: Persistence> {
    tasks: Vec<TaskRecord>,
    persistence: P,
}

impl<P: Persistence> TaskStore<P> {
    /// Hydrates a store from whatever the adapter currently holds.
    pub fn load(persistence: P) -> Self {
        let tasks = persistence.read();
        Self { tasks, persistence }
    }

    /// The full collection, in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[TaskRecord] {
        &self.tasks
    }

    /// Looks up a record by id.
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&TaskRecord> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    /// Appends a new, not-done task and persists the collection.
    ///
    /// Returns the new record, or `None` when the text is empty or over
    /// the length cap (the collection is untouched).
    pub fn add(&mut self, text: &str) -> Option<&TaskRecord> {
        if !text_is_valid(text) {
            return None;
        }
        self.tasks.push(TaskRecord::new(text));
        self.write_through();
        self.tasks.last()
    }

    /// Sets the done flag on the first record whose text matches
    /// exactly. Returns whether a record changed.
    pub fn set_done(&mut self, text: &str, done: bool) -> bool {
        self.find_by_text(text)
            .is_some_and(|id| self.set_done_by_id(&id, done))
    }

    /// Removes the first record whose text matches exactly. Returns
    /// whether a record was removed.
    pub fn remove(&mut self, text: &str) -> bool {
        self.find_by_text(text)
            .is_some_and(|id| self.remove_by_id(&id))
    }

    /// Renames the first record whose text matches `old` to `new`.
    /// Returns whether a record changed; an empty or over-long `new`
    /// is rejected without touching the collection.
    pub fn rename(&mut self, old: &str, new: &str) -> bool {
        self.find_by_text(old)
            .is_some_and(|id| self.rename_by_id(&id, new))
    }

    /// Sets the done flag on the record with the given id.
    pub fn set_done_by_id(&mut self, id: &TaskId, done: bool) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| &t.id == id) else {
            return false;
        };
        task.done = done;
        self.write_through();
        true
    }

    /// Removes the record with the given id.
    pub fn remove_by_id(&mut self, id: &TaskId) -> bool {
        let Some(index) = self.tasks.iter().position(|t| &t.id == id) else {
            return false;
        };
        self.tasks.remove(index);
        self.write_through();
        true
    }

    /// Renames the record with the given id, subject to the same text
    /// validation as [`add`](Self::add).
    pub fn rename_by_id(&mut self, id: &TaskId, new: &str) -> bool {
        if !text_is_valid(new) {
            return false;
        }
        let Some(task) = self.tasks.iter_mut().find(|t| &t.id == id) else {
            return false;
        };
        task.text = new.to_string();
        self.write_through();
        true
    }

    fn find_by_text(&self, text: &str) -> Option<TaskId> {
        self.tasks.iter().find(|t| t.text == text).map(|t| t.id.clone())
    }

    fn write_through(&self) {
        if let Err(e) = self.persistence.write(&self.tasks) {
            tracing::warn!("failed to persist task collection: {e}");
        }
    }
}
