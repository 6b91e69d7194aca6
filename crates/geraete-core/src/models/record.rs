use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::meta::SessionMetadata;
use super::response::ItemResponse;
use crate::error::CoreError;

/// Snapshot of one inspection session: the unit of persistence and export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CheckRecord {
    pub meta: SessionMetadata,
    /// One entry per schema item, in schema order.
    pub results: Vec<ItemResponse>,
    /// When the record was assembled (ISO-8601, UTC).
    pub timestamp: jiff::Timestamp,
}

impl CheckRecord {
    /// Pretty-printed JSON with 2-space indentation.
    pub fn to_json_pretty(&self) -> Result<Vec<u8>, CoreError> {
        Ok(serde_json::to_vec_pretty(self)?)
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, CoreError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn response(&self, id: &str) -> Option<&ItemResponse> {
        self.results.iter().find(|r| r.id == id)
    }
}

/// Display view of a persisted record: the storage key next to the record
/// fields. Only used for showing a summary, never written to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct StoredView {
    pub storage_key: String,
    #[serde(flatten)]
    pub record: CheckRecord,
}

impl StoredView {
    pub fn new(storage_key: impl Into<String>, record: CheckRecord) -> Self {
        Self {
            storage_key: storage_key.into(),
            record,
        }
    }
}
