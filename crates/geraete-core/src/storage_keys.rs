//! Storage key and file name conventions.
//!
//! Pure string functions. Keys are derived from device id and check date
//! only, so re-checking the same device on the same day replaces the
//! previous record.

use crate::models::SessionMetadata;

pub const KEY_PREFIX: &str = "geraete-check:";

/// Stand-in for an empty device id.
pub const UNKNOWN_DEVICE: &str = "unbekannt";

/// Shown in place of a storage key when a record was exported but not saved.
pub const EXPORT_MARKER: &str = "(kein lokaler Speicher – Export)";

pub const EXPORT_MEDIA_TYPE: &str = "application/json";

fn device_or_unknown(meta: &SessionMetadata) -> &str {
    if meta.device_id.is_empty() {
        UNKNOWN_DEVICE
    } else {
        &meta.device_id
    }
}

/// `geraete-check:<deviceId|unbekannt>:<checkDate>`
pub fn record_key(meta: &SessionMetadata) -> String {
    format!("{KEY_PREFIX}{}:{}", device_or_unknown(meta), meta.check_date)
}

/// `geraete-check-<deviceId|unbekannt>-<checkDate>.json`
pub fn export_file_name(meta: &SessionMetadata) -> String {
    artifact_file_name(meta, "json")
}

/// Export file name with an arbitrary extension (e.g. `docx`).
///
/// Characters that cannot appear in a file name (path separators, `:*?"<>|`,
/// control characters) are replaced with `_` in the device part. The record
/// itself keeps the verbatim device id.
pub fn artifact_file_name(meta: &SessionMetadata, extension: &str) -> String {
    format!(
        "geraete-check-{}-{}.{extension}",
        file_name_safe(device_or_unknown(meta)),
        meta.check_date
    )
}

fn file_name_safe(value: &str) -> String {
    value
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}
