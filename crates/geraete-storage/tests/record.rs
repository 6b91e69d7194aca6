use geraete_core::models::{CheckRecord, CheckResult, ItemResponse, SessionMetadata};
use geraete_core::storage_keys::record_key;
use geraete_storage::record::{list_record_keys, load_record, save_record};
use geraete_storage::{FileStore, KeyValueStore, MemoryStore, StorageError};

fn record(device_id: &str, notes: &str) -> CheckRecord {
    CheckRecord {
        meta: SessionMetadata {
            device_id: device_id.to_string(),
            tester_name: "Eva".to_string(),
            check_date: jiff::civil::date(2024, 5, 1),
        },
        results: vec![ItemResponse {
            id: "boot".to_string(),
            title: "Gerät startet und erreicht Desktop".to_string(),
            result: CheckResult::Ja,
            notes: notes.to_string(),
        }],
        timestamp: "2024-05-01T08:15:00Z".parse().unwrap(),
    }
}

#[test]
fn saved_record_loads_back_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(dir.path());
    let original = record("NB-1", "ok");
    let key = record_key(&original.meta);

    save_record(&mut store, &key, &original).unwrap();

    assert_eq!(load_record(&store, &key).unwrap(), Some(original));
}

#[test]
fn repeated_saves_keep_one_record_per_key() {
    let mut store = MemoryStore::new();
    for notes in ["erste Prüfung", "zweite Prüfung", "dritte Prüfung"] {
        let r = record("NB-1", notes);
        save_record(&mut store, &record_key(&r.meta), &r).unwrap();
    }

    let keys = list_record_keys(&store).unwrap();
    assert_eq!(keys, vec!["geraete-check:NB-1:2024-05-01".to_string()]);

    let latest = load_record(&store, &keys[0]).unwrap().unwrap();
    assert_eq!(latest.results[0].notes, "dritte Prüfung");
}

#[test]
fn load_of_missing_record_is_none() {
    let store = MemoryStore::new();
    assert_eq!(load_record(&store, "geraete-check:x:2024-05-01").unwrap(), None);
}

#[test]
fn corrupt_record_is_a_serialization_error() {
    let mut store = MemoryStore::new();
    store.set("geraete-check:x:2024-05-01", b"not json").unwrap();
    assert!(matches!(
        load_record(&store, "geraete-check:x:2024-05-01"),
        Err(StorageError::Serialization(_))
    ));
}
