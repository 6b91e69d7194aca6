use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One fixed inspection question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChecklistItemDefinition {
    /// Stable identifier, unique within a schema (e.g. "boot", "wifi").
    pub id: String,
    /// Human-readable question shown to the tester.
    pub title: String,
    /// Required items need a conclusive `ja`/`nein` before a record is saved.
    pub required: bool,
}

impl ChecklistItemDefinition {
    pub fn new(id: impl Into<String>, title: impl Into<String>, required: bool) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            required,
        }
    }

    /// Title as the presentation layer renders it, with ` *` on required items.
    pub fn display_title(&self) -> String {
        if self.required {
            format!("{} *", self.title)
        } else {
            self.title.clone()
        }
    }
}
