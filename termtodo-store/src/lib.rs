//! Task collection model, store, and persistence for `TermTodo`.
//!
//! The store owns the ordered task collection for a session and writes
//! it through a pluggable [`Persistence`] adapter on every mutation.

pub mod persist;
pub mod record;
pub mod store;

pub use persist::{JsonFileStore, MemoryStore, PersistError, Persistence};
pub use record::{MAX_TASK_TEXT_LENGTH, TaskId, TaskRecord};
pub use store::TaskStore;
