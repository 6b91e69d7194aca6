use geraete_storage::{FileStore, KeyValueStore, MemoryStore, StorageError};

#[test]
fn missing_key_reads_as_none() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("records"));
    assert_eq!(store.get("geraete-check:NB-1:2024-05-01").unwrap(), None);
    assert!(store.keys("").unwrap().is_empty());
}

#[test]
fn set_creates_directory_and_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(dir.path().join("records"));

    store.set("geraete-check:NB-1:2024-05-01", b"{}").unwrap();

    assert_eq!(
        store.get("geraete-check:NB-1:2024-05-01").unwrap().as_deref(),
        Some(&b"{}"[..])
    );
    let path = store.path_for("geraete-check:NB-1:2024-05-01").unwrap();
    assert!(path.exists());
    assert!(!path.file_name().unwrap().to_str().unwrap().contains(':'));
}

#[test]
fn set_replaces_previous_value() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(dir.path());

    store.set("geraete-check:NB-1:2024-05-01", b"first").unwrap();
    store.set("geraete-check:NB-1:2024-05-01", b"second").unwrap();

    assert_eq!(
        store.get("geraete-check:NB-1:2024-05-01").unwrap().as_deref(),
        Some(&b"second"[..])
    );
    assert_eq!(store.keys("").unwrap().len(), 1);
    // no temp files left behind
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn keys_filters_by_prefix_and_sorts() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(dir.path());

    store.set("geraete-check:NB-2:2024-05-01", b"{}").unwrap();
    store.set("geraete-check:NB-1:2024-05-01", b"{}").unwrap();
    store.set("settings", b"{}").unwrap();
    std::fs::write(dir.path().join("README.txt"), "not a record").unwrap();

    assert_eq!(
        store.keys("geraete-check:").unwrap(),
        vec![
            "geraete-check:NB-1:2024-05-01".to_string(),
            "geraete-check:NB-2:2024-05-01".to_string(),
        ]
    );
}

#[test]
fn empty_key_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(dir.path());
    assert!(matches!(
        store.set("", b"{}"),
        Err(StorageError::InvalidKey(_))
    ));

    let mut memory = MemoryStore::new();
    assert!(matches!(
        memory.set("", b"{}"),
        Err(StorageError::InvalidKey(_))
    ));
}

#[test]
fn memory_store_behaves_like_file_store() {
    let mut store = MemoryStore::new();
    store.set("geraete-check:a:2024-05-01", b"1").unwrap();
    store.set("geraete-check:a:2024-05-01", b"2").unwrap();
    store.set("other", b"3").unwrap();

    assert_eq!(store.len(), 2);
    assert_eq!(
        store.get("geraete-check:a:2024-05-01").unwrap().as_deref(),
        Some(&b"2"[..])
    );
    assert_eq!(
        store.keys("geraete-check:").unwrap(),
        vec!["geraete-check:a:2024-05-01".to_string()]
    );
}

#[test]
fn very_long_keys_are_stored_under_bounded_file_names() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(dir.path());
    let long = format!("geraete-check:{}:2024-05-01", "Ä".repeat(50));

    store.set(&long, b"first").unwrap();
    store.set(&long, b"second").unwrap();
    store.set("geraete-check:NB-1:2024-05-01", b"{}").unwrap();

    assert_eq!(store.get(&long).unwrap().as_deref(), Some(&b"second"[..]));
    assert_eq!(
        store.keys("geraete-check:").unwrap(),
        vec!["geraete-check:NB-1:2024-05-01".to_string(), long.clone()]
    );
    for entry in std::fs::read_dir(dir.path()).unwrap() {
        let name = entry.unwrap().file_name();
        assert!(name.len() <= 255, "file name too long: {name:?}");
        assert!(!name.to_string_lossy().ends_with(".tmp"));
    }
}

#[test]
fn hashed_entry_without_key_file_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(dir.path());
    let long = format!("geraete-check:{}:2024-05-01", "Ä".repeat(50));
    store.set(&long, b"{}").unwrap();

    let key_file = store.path_for(&long).unwrap().with_extension("key");
    std::fs::remove_file(key_file).unwrap();

    assert!(store.keys("").unwrap().is_empty());
    assert_eq!(store.get(&long).unwrap().as_deref(), Some(&b"{}"[..]));
}
