//! Unit tests for the HistoryManager public API.
//!
//! These tests exercise recording, recalling, deletion, and clearing through
//! the `HistoryManagerTrait` interface, using an in-memory store.

use std::sync::Arc;

use qr_baghdad::database::Database;
use qr_baghdad::types::errors::HistoryError;
use qr_baghdad::managers::history_manager::{
    ClearOutcome, HistoryManager, HistoryManagerTrait, RecordOutcome, RemoveOutcome, HISTORY_KEY,
    HISTORY_LIMIT,
};

fn setup() -> (Arc<Database>, HistoryManager) {
    let db = Arc::new(Database::open_in_memory().expect("Failed to open in-memory database"));
    let mgr = HistoryManager::load(db.clone()).expect("Failed to load history");
    (db, mgr)
}

/// record("hello") → [hello]; record("world") → [world, hello];
/// record("hello") again → unchanged order, no duplicate.
#[test]
fn test_record_dedupes_without_reorder() {
    let (_db, mut mgr) = setup();

    assert_eq!(mgr.record("hello").unwrap(), RecordOutcome::Added);
    assert_eq!(mgr.record("world").unwrap(), RecordOutcome::Added);
    let texts: Vec<&str> = mgr.items().iter().map(|i| i.text.as_str()).collect();
    assert_eq!(texts, vec!["world", "hello"]);

    // Re-recording an existing text is a no-op that preserves position
    assert_eq!(mgr.record("hello").unwrap(), RecordOutcome::Duplicate);
    let texts: Vec<&str> = mgr.items().iter().map(|i| i.text.as_str()).collect();
    assert_eq!(texts, vec!["world", "hello"]);
}

/// 51 distinct records → 50 items, the oldest dropped.
#[test]
fn test_record_caps_at_fifty() {
    let (_db, mut mgr) = setup();

    for i in 0..51 {
        mgr.record(&format!("text-{}", i)).unwrap();
    }

    assert_eq!(mgr.items().len(), HISTORY_LIMIT);
    assert_eq!(mgr.items()[0].text, "text-50");
    assert_eq!(mgr.items()[49].text, "text-1");
    // The very first record fell off the end
    assert!(!mgr.items().iter().any(|i| i.text == "text-0"));
}

/// Ids are strictly increasing with insertion, so the newest-first list
/// carries strictly decreasing ids.
#[test]
fn test_ids_are_unique_and_descending() {
    let (_db, mut mgr) = setup();
    for i in 0..10 {
        mgr.record(&format!("item-{}", i)).unwrap();
    }
    let ids: Vec<i64> = mgr.items().iter().map(|i| i.id).collect();
    for pair in ids.windows(2) {
        assert!(pair[0] > pair[1], "ids must be strictly descending: {:?}", ids);
    }
}

/// recall is a pure read: list length and contents are unchanged.
#[test]
fn test_recall_is_pure_read() {
    let (_db, mut mgr) = setup();
    mgr.record("hello").unwrap();
    mgr.record("world").unwrap();

    let before: Vec<_> = mgr.items().to_vec();
    let id = before[1].id;

    let item = mgr.recall(id).expect("item should exist");
    assert_eq!(item.text, "hello");
    assert_eq!(mgr.items(), before.as_slice());

    // Unknown id is a quiet None
    assert!(mgr.recall(-1).is_none());
    assert_eq!(mgr.items(), before.as_slice());
}

/// remove twice with the same id: second call is a no-op, not an error.
#[test]
fn test_remove_is_idempotent() {
    let (_db, mut mgr) = setup();
    mgr.record("hello").unwrap();
    mgr.record("world").unwrap();
    let id = mgr.items()[0].id;

    assert_eq!(mgr.remove(id).unwrap(), RemoveOutcome::Removed);
    assert_eq!(mgr.items().len(), 1);
    assert_eq!(mgr.remove(id).unwrap(), RemoveOutcome::NotFound);
    assert_eq!(mgr.items().len(), 1);
}

/// clear on an empty list reports "already empty" and leaves storage
/// untouched; a confirmed clear empties the list and the persisted blob.
#[test]
fn test_clear_semantics() {
    let (db, mut mgr) = setup();

    assert_eq!(mgr.clear(true).unwrap(), ClearOutcome::AlreadyEmpty);
    assert_eq!(db.get_value(HISTORY_KEY).unwrap(), None);

    mgr.record("hello").unwrap();
    assert_eq!(mgr.clear(false).unwrap(), ClearOutcome::NotConfirmed);
    assert_eq!(mgr.items().len(), 1);

    assert_eq!(mgr.clear(true).unwrap(), ClearOutcome::Cleared);
    assert!(mgr.items().is_empty());
    assert_eq!(db.get_value(HISTORY_KEY).unwrap().as_deref(), Some("[]"));
}

/// The persisted blob reloads into an identical list.
#[test]
fn test_history_survives_reload() {
    let (db, mut mgr) = setup();
    mgr.record("hello").unwrap();
    mgr.record("world").unwrap();
    let before = mgr.items().to_vec();

    let mgr2 = HistoryManager::load(db).unwrap();
    assert_eq!(mgr2.items(), before.as_slice());
}

/// Input is trimmed before de-duplication.
#[test]
fn test_record_trims_input() {
    let (_db, mut mgr) = setup();
    mgr.record("hello").unwrap();
    assert_eq!(mgr.record("  hello  ").unwrap(), RecordOutcome::Duplicate);
    assert_eq!(mgr.items().len(), 1);
}

/// A failed durable write is recoverable: the call reports the storage
/// error but the in-memory list keeps the new entry and the session
/// continues.
#[test]
fn test_record_keeps_memory_on_storage_failure() {
    let (db, mut mgr) = setup();
    mgr.record("hello").unwrap();
    db.connection()
        .execute_batch("DROP TABLE local_store")
        .unwrap();

    let result = mgr.record("world");
    assert!(matches!(result, Err(HistoryError::StorageError(_))));
    let texts: Vec<&str> = mgr.items().iter().map(|i| i.text.as_str()).collect();
    assert_eq!(texts, vec!["world", "hello"]);
}

/// A malformed persisted blob is a load error, not a panic.
#[test]
fn test_load_malformed_blob_is_error() {
    let db = Arc::new(Database::open_in_memory().unwrap());
    db.set_value(HISTORY_KEY, "{ not a list }").unwrap();
    assert!(HistoryManager::load(db).is_err());
}
