use serde::{Serialize, de::DeserializeOwned};

use geraete_core::models::CheckRecord;
use geraete_core::storage_keys::KEY_PREFIX;

use crate::error::StorageError;
use crate::store::KeyValueStore;

/// Load a JSON value. Returns `None` if nothing is stored under `key`.
pub fn load_json<T: DeserializeOwned, S: KeyValueStore + ?Sized>(
    store: &S,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match store.get(key)? {
        Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
        None => Ok(None),
    }
}

/// Save a value as pretty-printed JSON, replacing whatever was there.
pub fn save_json<T: Serialize, S: KeyValueStore + ?Sized>(
    store: &mut S,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    store.set(key, &body)
}

pub fn save_record<S: KeyValueStore + ?Sized>(
    store: &mut S,
    key: &str,
    record: &CheckRecord,
) -> Result<(), StorageError> {
    save_json(store, key, record)?;
    tracing::info!(
        key = %key,
        device_id = %record.meta.device_id,
        check_date = %record.meta.check_date,
        "check record saved"
    );
    Ok(())
}

pub fn load_record<S: KeyValueStore + ?Sized>(
    store: &S,
    key: &str,
) -> Result<Option<CheckRecord>, StorageError> {
    load_json(store, key)
}

/// Keys of all stored check records, sorted.
pub fn list_record_keys<S: KeyValueStore + ?Sized>(store: &S) -> Result<Vec<String>, StorageError> {
    store.keys(KEY_PREFIX)
}
