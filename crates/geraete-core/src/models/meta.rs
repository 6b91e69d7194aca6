use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Who checked which device, and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SessionMetadata {
    /// Identifier of the unit under test. May be empty.
    pub device_id: String,
    pub tester_name: String,
    /// Calendar date of the check, serialized as `YYYY-MM-DD`.
    pub check_date: Date,
}

/// Metadata fields exactly as typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export)]
pub struct RawMeta {
    pub device_id: String,
    pub tester_name: String,
    pub check_date: String,
}

impl RawMeta {
    pub fn new(
        device_id: impl Into<String>,
        tester_name: impl Into<String>,
        check_date: impl Into<String>,
    ) -> Self {
        Self {
            device_id: device_id.into(),
            tester_name: tester_name.into(),
            check_date: check_date.into(),
        }
    }
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_check_date(value: &str) -> Result<Date, CoreError> {
    value
        .trim()
        .parse::<Date>()
        .map_err(|source| CoreError::InvalidDate {
            value: value.to_string(),
            source,
        })
}
