//! CRUD operation tests for SqliteStore

use strand_core::{
    storage::{StoreError, StringStore},
    StoredString,
};
use strand_sqlite::SqliteStore;

/// Helper to create a stored string at a fixed time
fn create_test_string(value: &str) -> StoredString {
    StoredString::new(value, 1704067200000) // 2024-01-01 00:00:00 UTC
}

#[test]
fn test_put_and_get() {
    let mut store = SqliteStore::in_memory().unwrap();
    let record = create_test_string("A man a plan");
    let id = record.id.clone();

    store.put(record.clone()).unwrap();

    let retrieved = store.get(&id).unwrap();
    assert!(retrieved.is_some());

    let retrieved = retrieved.unwrap();
    assert_eq!(retrieved, record);
    assert_eq!(retrieved.properties.word_count(), 4);
    assert_eq!(retrieved.properties.character_frequency().get('a'), 3);
}

#[test]
fn test_put_duplicate_fails() {
    let mut store = SqliteStore::in_memory().unwrap();

    store.put(create_test_string("twice")).unwrap();

    let result = store.put(StoredString::new("twice", 1704067300000));
    assert!(matches!(result, Err(StoreError::AlreadyExists(_))));
    assert_eq!(store.count().unwrap(), 1);
}

#[test]
fn test_get_nonexistent() {
    let store = SqliteStore::in_memory().unwrap();
    assert!(store.get("0000").unwrap().is_none());
    assert!(store.get_by_value("missing").unwrap().is_none());
}

#[test]
fn test_get_by_value() {
    let mut store = SqliteStore::in_memory().unwrap();
    let record = create_test_string("hello world");
    store.put(record.clone()).unwrap();

    let retrieved = store.get_by_value("hello world").unwrap().unwrap();
    assert_eq!(retrieved.id, record.id);
}

#[test]
fn test_delete_by_value() {
    let mut store = SqliteStore::in_memory().unwrap();
    let record = create_test_string("ephemeral");
    let id = record.id.clone();

    store.put(record).unwrap();
    assert!(store.exists(&id).unwrap());

    assert!(store.delete_by_value("ephemeral").unwrap());
    assert!(!store.exists(&id).unwrap());
    assert!(!store.delete_by_value("ephemeral").unwrap());
}

#[test]
fn test_list_newest_first() {
    let mut store = SqliteStore::in_memory().unwrap();

    store.put(StoredString::new("first", 1000)).unwrap();
    store.put(StoredString::new("third", 3000)).unwrap();
    store.put(StoredString::new("second", 2000)).unwrap();

    let values: Vec<String> = store
        .list()
        .unwrap()
        .into_iter()
        .map(|s| s.value)
        .collect();
    assert_eq!(values, vec!["third", "second", "first"]);
}

#[test]
fn test_count_and_clear() {
    let mut store = SqliteStore::in_memory().unwrap();
    assert_eq!(store.count().unwrap(), 0);

    store.put(create_test_string("one")).unwrap();
    store.put(create_test_string("two")).unwrap();
    assert_eq!(store.count().unwrap(), 2);

    store.clear().unwrap();
    assert_eq!(store.count().unwrap(), 0);
}

#[test]
fn test_timestamp_preservation() {
    let mut store = SqliteStore::in_memory().unwrap();
    let record = StoredString::new("timed", 1704067200123);

    store.put(record).unwrap();

    let retrieved = store.get_by_value("timed").unwrap().unwrap();
    assert_eq!(retrieved.created_at, 1704067200123);
}

#[test]
fn test_unicode_roundtrip() {
    let mut store = SqliteStore::in_memory().unwrap();
    let record = create_test_string("été à l'eau");

    store.put(record.clone()).unwrap();

    let retrieved = store.get(&record.id).unwrap().unwrap();
    assert_eq!(retrieved.value, "été à l'eau");
    assert_eq!(retrieved.properties.length(), 11);
    assert_eq!(retrieved.properties.character_frequency().get('é'), 2);
}

#[test]
fn test_file_backed_store_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("strings.db");

    {
        let mut store = SqliteStore::open(&path).unwrap();
        store.put(create_test_string("durable")).unwrap();
    }

    let store = SqliteStore::open(&path).unwrap();
    let retrieved = store.get_by_value("durable").unwrap();
    assert!(retrieved.is_some());
}

#[test]
fn test_put_rejects_unrepresentable_timestamp() {
    let mut store = SqliteStore::in_memory().unwrap();

    let result = store.put(StoredString::new("far future", i64::MAX));
    assert!(matches!(result, Err(StoreError::InvalidData(_))));
    assert_eq!(store.count().unwrap(), 0);
}
