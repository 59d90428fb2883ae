//! Property-based persistence and store tests.
//!
//! Uses proptest to verify:
//! 1. Any task collection survives a write → read round-trip, in memory
//!    and through the JSON file slot.
//! 2. Arbitrary slot contents never cause a panic on read (malformed
//!    data degrades to an empty collection).
//! 3. Store mutation length invariants hold for arbitrary input.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use proptest::prelude::*;
use termtodo_store::{
    JsonFileStore, MAX_TASK_TEXT_LENGTH, MemoryStore, Persistence, TaskId, TaskRecord, TaskStore,
};
use uuid::Uuid;

// --- Strategies for task data ---

/// Strategy for generating arbitrary `TaskId` values.
fn arb_task_id() -> impl Strategy<Value = TaskId> {
    any::<u128>().prop_map(|n| TaskId::from_uuid(Uuid::from_u128(n)))
}

/// Strategy for valid task text: non-empty, NUL-free, within the cap.
fn arb_text() -> impl Strategy<Value = String> {
    "[^\x00]{1,64}"
}

/// Strategy for generating arbitrary task records.
fn arb_record() -> impl Strategy<Value = TaskRecord> {
    (arb_task_id(), arb_text(), any::<bool>()).prop_map(|(id, text, done)| TaskRecord {
        id,
        text,
        done,
    })
}

/// Strategy for generating arbitrary task collections.
fn arb_collection() -> impl Strategy<Value = Vec<TaskRecord>> {
    prop::collection::vec(arb_record(), 0..16)
}

// --- Property tests ---

proptest! {
    /// Any collection survives a memory-slot round-trip.
    #[test]
    fn memory_slot_round_trip(tasks in arb_collection()) {
        let slot = MemoryStore::new();
        slot.write(&tasks).expect("write should succeed");
        prop_assert_eq!(slot.read(), tasks);
    }

    /// Any collection survives a file-slot round-trip, ids included.
    #[test]
    fn file_slot_round_trip(tasks in arb_collection()) {
        let dir = tempfile::tempdir().expect("tempdir");
        let slot = JsonFileStore::new(dir.path().join("tasks.json"));
        slot.write(&tasks).expect("write should succeed");
        prop_assert_eq!(slot.read(), tasks);
    }

    /// Arbitrary slot bytes never cause a panic on read.
    #[test]
    fn random_slot_bytes_read_no_panic(bytes in prop::collection::vec(any::<u8>(), 0..512)) {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("tasks.json");
        std::fs::write(&path, &bytes).expect("write bytes");
        // We don't care what it yields, just that it doesn't panic.
        let _ = JsonFileStore::new(path).read();
    }

    /// Arbitrary JSON-ish text degrades to an empty collection, not an error.
    #[test]
    fn non_collection_json_reads_as_empty(text in "[a-z{}\\[\\]\":,0-9]{0,64}") {
        prop_assume!(serde_json::from_str::<Vec<TaskRecord>>(&text).is_err());
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("tasks.json");
        std::fs::write(&path, &text).expect("write text");
        prop_assert!(JsonFileStore::new(path).read().is_empty());
    }

    /// Adding valid text grows the collection by exactly one, not done.
    #[test]
    fn add_grows_by_one_with_done_false(tasks in arb_collection(), text in arb_text()) {
        let slot = MemoryStore::new();
        slot.write(&tasks).expect("seed slot");
        let mut store = TaskStore::load(slot);

        let before = store.tasks().len();
        let record = store.add(&text).expect("valid text should be added");
        prop_assert!(!record.done);
        prop_assert_eq!(store.tasks().len(), before + 1);
    }

    /// Adding empty or over-long text never changes the collection.
    #[test]
    fn add_invalid_text_is_noop(tasks in arb_collection(), pad in 1usize..8) {
        let slot = MemoryStore::new();
        slot.write(&tasks).expect("seed slot");
        let mut store = TaskStore::load(slot);

        let before = store.tasks().to_vec();
        prop_assert!(store.add("").is_none());
        let over: String = "x".repeat(MAX_TASK_TEXT_LENGTH + pad);
        prop_assert!(store.add(&over).is_none());
        prop_assert_eq!(store.tasks(), &before[..]);
    }

    /// Removing an absent key never changes the collection length.
    #[test]
    fn remove_absent_key_is_noop(tasks in arb_collection()) {
        let slot = MemoryStore::new();
        slot.write(&tasks).expect("seed slot");
        let mut store = TaskStore::load(slot);

        let before = store.tasks().len();
        // NUL never appears in generated text, so this key is absent.
        prop_assert!(!store.remove("\u{0}"), "removing absent NUL key must be a no-op");
        prop_assert_eq!(store.tasks().len(), before);
    }

    /// Setting done and then setting it back restores the original flag
    /// for the first record of any collection.
    #[test]
    fn set_done_round_trip(tasks in prop::collection::vec(arb_record(), 1..16)) {
        let original_done = tasks[0].done;
        let text = tasks[0].text.clone();
        let slot = MemoryStore::new();
        slot.write(&tasks).expect("seed slot");
        let mut store = TaskStore::load(slot);

        prop_assert!(store.set_done(&text, !original_done));
        prop_assert!(store.set_done(&text, original_done));
        // First-match semantics: both writes hit the first record with
        // this text, which is the record we sampled.
        prop_assert_eq!(store.tasks()[0].done, original_done);
    }
}
