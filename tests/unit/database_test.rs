//! Unit tests for the durable key-value store.
//!
//! The store's only contract is exact round-tripping of opaque text blobs
//! under their keys.

use qr_baghdad::database::{migrations, Database};

#[test]
fn test_migrations_create_local_store() {
    let db = Database::open_in_memory().expect("Failed to open in-memory database");
    let tables: Vec<String> = {
        let conn = db.connection();
        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap();
        stmt.query_map([], |row| row.get(0))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect()
    };
    assert!(tables.contains(&"local_store".to_string()));
    assert!(tables.contains(&"schema_version".to_string()));
}

#[test]
fn test_schema_version_recorded() {
    let db = Database::open_in_memory().unwrap();
    assert_eq!(
        migrations::get_schema_version(db.connection()),
        migrations::CURRENT_SCHEMA_VERSION
    );
}

#[test]
fn test_get_missing_key_is_none() {
    let db = Database::open_in_memory().unwrap();
    assert_eq!(db.get_value("qr-history").unwrap(), None);
}

#[test]
fn test_blob_round_trips_exactly() {
    let db = Database::open_in_memory().unwrap();
    let blob = r#"[{"id":1,"text":"مرحبا","timestamp":"28/08/2026 10:00:00"}]"#;
    db.set_value("qr-history", blob).unwrap();
    assert_eq!(db.get_value("qr-history").unwrap().as_deref(), Some(blob));
}

#[test]
fn test_set_replaces_previous_blob() {
    let db = Database::open_in_memory().unwrap();
    db.set_value("qr-settings", "{\"size\":256}").unwrap();
    db.set_value("qr-settings", "{\"size\":512}").unwrap();
    assert_eq!(
        db.get_value("qr-settings").unwrap().as_deref(),
        Some("{\"size\":512}")
    );
}

#[test]
fn test_delete_is_idempotent() {
    let db = Database::open_in_memory().unwrap();
    db.set_value("qr-history", "[]").unwrap();
    db.delete_value("qr-history").unwrap();
    assert_eq!(db.get_value("qr-history").unwrap(), None);
    // Second delete is a no-op, not an error
    db.delete_value("qr-history").unwrap();
}

#[test]
fn test_keys_are_independent() {
    let db = Database::open_in_memory().unwrap();
    db.set_value("qr-history", "[]").unwrap();
    db.set_value("qr-settings", "{}").unwrap();
    db.delete_value("qr-history").unwrap();
    assert_eq!(db.get_value("qr-settings").unwrap().as_deref(), Some("{}"));
}

#[test]
fn test_persistent_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("qr-baghdad.db");

    {
        let db = Database::open(&path).unwrap();
        db.set_value("qr-history", "[1,2,3]").unwrap();
    }

    let db = Database::open(&path).unwrap();
    assert_eq!(
        db.get_value("qr-history").unwrap().as_deref(),
        Some("[1,2,3]")
    );
}
