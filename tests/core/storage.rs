//! SQLite dictionary store tests

use crate::common::{ids, TestDictionary};
use kotoba::core::error::KotobaError;
use kotoba::core::storage::{DictionaryStore, SqliteStore};
use kotoba::core::types::{Field, FieldHit};

#[test]
fn test_open_and_count() {
    let dict = TestDictionary::sample();
    let store = SqliteStore::open(&dict.path).unwrap();

    assert_eq!(store.entry_count().unwrap(), 9);
    assert_eq!(store.path(), Some(dict.path.as_path()));
}

#[test]
fn test_open_missing_file() {
    let dict = TestDictionary::sample();
    let result = SqliteStore::open(&dict.dir.path().join("nope.db"));

    match result {
        Err(KotobaError::StoreError(msg)) => assert!(msg.contains("not found")),
        _ => panic!("Expected StoreError"),
    }
}

#[test]
fn test_find_containing_reading() {
    let dict = TestDictionary::sample();
    let store = SqliteStore::open(&dict.path).unwrap();

    let hits = store.find_containing(Field::Reading, "シャツ").unwrap();
    assert_eq!(hits, vec![FieldHit::new(ids::TSHATSU, "ティーシャツ")]);
}

#[test]
fn test_find_prefix_meaning() {
    let dict = TestDictionary::sample();
    let store = SqliteStore::open(&dict.path).unwrap();

    let hits = store.find_prefix(Field::Meaning, "comp").unwrap();
    assert_eq!(hits, vec![FieldHit::new(ids::SHIIDII, "compact disc")]);
}

#[test]
fn test_load_entries_aggregates_all_fields() {
    let dict = TestDictionary::sample();
    let store = SqliteStore::open(&dict.path).unwrap();

    let entries = store.load_entries(&[ids::MIZU, ids::KOOHII]).unwrap();

    assert_eq!(entries[0].id, ids::MIZU);
    assert_eq!(entries[0].kanji, vec!["水"]);
    assert_eq!(entries[0].meanings, vec!["water", "fluid"]);
    assert_eq!(entries[1].id, ids::KOOHII);
    assert!(entries[1].kanji.is_empty());
}

#[test]
fn test_load_entries_unknown_id_is_empty_result() {
    let dict = TestDictionary::sample();
    let store = SqliteStore::open(&dict.path).unwrap();

    let entries = store.load_entries(&[42]).unwrap();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].kanji.is_empty());
    assert!(entries[0].readings.is_empty());
    assert!(entries[0].meanings.is_empty());
}

#[test]
fn test_store_usable_across_threads() {
    let dict = TestDictionary::sample();
    let store = std::sync::Arc::new(SqliteStore::open(&dict.path).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let store = std::sync::Arc::clone(&store);
            std::thread::spawn(move || store.find_containing(Field::Kanji, "食").unwrap().len())
        })
        .collect();

    for handle in handles {
        // 食べる, 食べ過ぎる, 食べ物, 食事
        assert_eq!(handle.join().unwrap(), 4);
    }
}
