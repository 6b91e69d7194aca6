use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::store::KeyValueStore;

const EXTENSION: &str = "json";
const KEY_EXTENSION: &str = "key";

/// Longest encoded key used verbatim as a file stem. Most file systems cap
/// a name at 255 bytes.
const MAX_ENCODED_LEN: usize = 200;

/// Marks hashed file stems. `encode_key` never emits it (`~` becomes `%7E`).
const HASHED_MARKER: char = '~';

/// Directory-backed store: one file per key.
///
/// Keys are percent-encoded into file names so that `:` and other
/// characters survive on every platform. A key whose encoding would be too
/// long is stored as `~<blake3 hex>.json` next to a `~<blake3 hex>.key`
/// file holding the original key.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File that holds the value for `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        if key.is_empty() {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{}.{EXTENSION}", file_stem(key))))
    }

    fn key_file_for(&self, stem: &str) -> PathBuf {
        self.root.join(format!("{stem}.{KEY_EXTENSION}"))
    }

    /// Original key behind a file stem, or `None` if it cannot be recovered.
    fn key_from_stem(&self, stem: &str) -> Result<Option<String>, StorageError> {
        if !stem.starts_with(HASHED_MARKER) {
            return Ok(decode_key(stem));
        }
        let path = self.key_file_for(stem);
        match std::fs::read(&path) {
            Ok(bytes) => Ok(String::from_utf8(bytes).ok()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::io(path, e)),
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let path = self.path_for(key)?;
        match std::fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::io(path, e)),
        }
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.root).map_err(|e| StorageError::io(&self.root, e))?;

        let stem = file_stem(key);
        if stem.starts_with(HASHED_MARKER) {
            write_atomic(&self.key_file_for(&stem), key.as_bytes())?;
        }
        write_atomic(&path, value)?;

        tracing::debug!(key = %key, path = %path.display(), "value written");
        Ok(())
    }

    fn keys(&self, prefix: &str) -> Result<Vec<String>, StorageError> {
        let entries = match std::fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StorageError::io(&self.root, e)),
        };

        let mut keys = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| StorageError::io(&self.root, e))?;
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };
            let Some(stem) = name.strip_suffix(".json") else {
                continue;
            };
            match self.key_from_stem(stem)? {
                Some(key) if key.starts_with(prefix) => keys.push(key),
                Some(_) => {}
                None => tracing::warn!(file = %name, "skipping file with undecodable name"),
            }
        }
        keys.sort();
        Ok(keys)
    }
}

/// Write to a temp file then rename for atomicity.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), StorageError> {
    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp_path = PathBuf::from(tmp_name);
    std::fs::write(&tmp_path, bytes).map_err(|e| StorageError::io(&tmp_path, e))?;
    std::fs::rename(&tmp_path, path).map_err(|e| StorageError::io(path, e))?;
    Ok(())
}

fn file_stem(key: &str) -> String {
    let encoded = encode_key(key);
    if encoded.len() <= MAX_ENCODED_LEN {
        encoded
    } else {
        format!("{HASHED_MARKER}{}", blake3::hash(key.as_bytes()).to_hex())
    }
}

fn is_plain(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.')
}

/// Bytes outside `[A-Za-z0-9._-]` become `%XX`.
fn encode_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for byte in key.bytes() {
        if is_plain(byte) {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

fn decode_key(encoded: &str) -> Option<String> {
    let bytes = encoded.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = encoded.get(i + 1..i + 3)?;
            out.push(u8::from_str_radix(hex, 16).ok()?);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).ok()
}
