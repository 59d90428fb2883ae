//! Persistence adapters for the task collection.
//!
//! One named slot holds the serialized collection as a JSON array.
//! [`JsonFileStore`] is the durable adapter: reads treat an absent or
//! malformed slot as empty, writes replace the slot atomically via a
//! sibling temp file. [`MemoryStore`] is a volatile adapter backing
//! tests and ephemeral sessions.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;

use crate::record::TaskRecord;

/// Errors that can occur when writing the persistence slot.
#[derive(Debug, Error)]
pub enum PersistError {
    /// Failed to create the directory that holds the slot file.
    #[error("failed to create data directory {path}: {source}")]
    CreateDir {
        /// Directory that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to write or replace the slot file.
    #[error("failed to write task data to {path}: {source}")]
    WriteFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to serialize the collection.
    #[error("failed to serialize task collection: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A durable or volatile slot holding the whole task collection.
///
/// Any key-value backend satisfying these two operations fulfills the
/// role; [`crate::TaskStore`] is generic over the implementation.
pub trait Persistence {
    /// Returns the stored collection.
    ///
    /// An absent, unreadable, or malformed slot yields an empty
    /// collection. Read failures are logged, never propagated.
    fn read(&self) -> Vec<TaskRecord>;

    /// Serializes the full collection and replaces the slot.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError`] if the slot cannot be written.
    fn write(&self, tasks: &[TaskRecord]) -> Result<(), PersistError>;
}

impl<P: Persistence> Persistence for Arc<P> {
    fn read(&self) -> Vec<TaskRecord> {
        self.as_ref().read()
    }

    fn write(&self, tasks: &[TaskRecord]) -> Result<(), PersistError> {
        self.as_ref().write(tasks)
    }
}

/// JSON-file-backed slot.
///
/// The slot value is a JSON array of task records, pretty-printed so the
/// file stays hand-inspectable.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates an adapter over the given slot file path.
    ///
    /// The file and its parent directory need not exist yet; they are
    /// created on first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The slot file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Persistence for JsonFileStore {
    fn read(&self) -> Vec<TaskRecord> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!("failed to read task data from {}: {e}", self.path.display());
                return Vec::new();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(tasks) => tasks,
            Err(e) => {
                tracing::warn!("malformed task data in {}: {e}", self.path.display());
                Vec::new()
            }
        }
    }

    fn write(&self, tasks: &[TaskRecord]) -> Result<(), PersistError> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            std::fs::create_dir_all(dir).map_err(|e| PersistError::CreateDir {
                path: dir.to_path_buf(),
                source: e,
            })?;
        }

        let json = serde_json::to_string_pretty(tasks)?;

        // Write a sibling temp file, then rename over the slot so readers
        // never observe a partially written collection.
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json).map_err(|e| PersistError::WriteFile {
            path: tmp.clone(),
            source: e,
        })?;
        std::fs::rename(&tmp, &self.path).map_err(|e| PersistError::WriteFile {
            path: self.path.clone(),
            source: e,
        })
    }
}

/// Volatile in-memory slot for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStore {
    tasks: Mutex<Vec<TaskRecord>>,
}

impl MemoryStore {
    /// Creates a new, empty in-memory slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Persistence for MemoryStore {
    fn read(&self) -> Vec<TaskRecord> {
        self.tasks.lock().clone()
    }

    fn write(&self, tasks: &[TaskRecord]) -> Result<(), PersistError> {
        *self.tasks.lock() = tasks.to_vec();
        Ok(())
    }
}
