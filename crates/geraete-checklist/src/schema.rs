use std::collections::HashSet;

use geraete_core::models::ChecklistItemDefinition;

use crate::builtin;
use crate::error::SchemaError;

/// Fixed, ordered list of inspection items.
///
/// Built once at startup and handed to the workflow; never mutated
/// afterwards. Item ids are guaranteed unique and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistSchema {
    items: Vec<ChecklistItemDefinition>,
}

impl ChecklistSchema {
    pub fn new(items: Vec<ChecklistItemDefinition>) -> Result<Self, SchemaError> {
        let mut seen = HashSet::new();
        for (position, item) in items.iter().enumerate() {
            if item.id.trim().is_empty() {
                return Err(SchemaError::EmptyId(position));
            }
            if !seen.insert(item.id.as_str()) {
                return Err(SchemaError::DuplicateId(item.id.clone()));
            }
        }
        Ok(Self { items })
    }

    /// The built-in refurbished-device checklist.
    pub fn default_device_check() -> Self {
        Self {
            items: builtin::device_check_items(),
        }
    }

    /// Parse a JSON array of item definitions.
    pub fn from_json(bytes: &[u8]) -> Result<Self, SchemaError> {
        let items: Vec<ChecklistItemDefinition> = serde_json::from_slice(bytes)?;
        Self::new(items)
    }

    pub fn items(&self) -> &[ChecklistItemDefinition] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&ChecklistItemDefinition> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn required_items(&self) -> impl Iterator<Item = &ChecklistItemDefinition> {
        self.items.iter().filter(|item| item.required)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for ChecklistSchema {
    fn default() -> Self {
        Self::default_device_check()
    }
}
