use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

/// Outcome of a single inspection item.
///
/// Serialized as `""`, `"ja"`, `"nein"` or `"n/a"`. Any other input string
/// reads back as [`CheckResult::Unanswered`] instead of failing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, TS)]
#[ts(export)]
pub enum CheckResult {
    #[default]
    #[serde(rename = "")]
    Unanswered,
    #[serde(rename = "ja")]
    Ja,
    #[serde(rename = "nein")]
    Nein,
    /// "Nicht geprüft": the item was deliberately skipped.
    #[serde(rename = "n/a")]
    NotApplicable,
}

impl CheckResult {
    /// Lenient parse used for raw form input. Surrounding whitespace and
    /// letter case are ignored; unknown values become `Unanswered`.
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "ja" => Self::Ja,
            "nein" => Self::Nein,
            "n/a" => Self::NotApplicable,
            _ => Self::Unanswered,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unanswered => "",
            Self::Ja => "ja",
            Self::Nein => "nein",
            Self::NotApplicable => "n/a",
        }
    }

    /// A conclusive answer is `ja` or `nein`; only these satisfy a required item.
    pub fn is_conclusive(self) -> bool {
        matches!(self, Self::Ja | Self::Nein)
    }

    /// Label matching the answer options of the checklist form.
    pub fn label(self) -> &'static str {
        match self {
            Self::Unanswered => "—",
            Self::Ja => "Ja",
            Self::Nein => "Nein",
            Self::NotApplicable => "Nicht geprüft",
        }
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CheckResult {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_raw(&raw))
    }
}

/// The tester's answer to one schema item, as stored in a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemResponse {
    pub id: String,
    /// Copy of the definition's title at collection time.
    pub title: String,
    pub result: CheckResult,
    pub notes: String,
}

/// Unvalidated answer for one item as handed over by the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct RawAnswer {
    pub result: String,
    pub notes: String,
}

impl RawAnswer {
    pub fn new(result: impl Into<String>, notes: impl Into<String>) -> Self {
        Self {
            result: result.into(),
            notes: notes.into(),
        }
    }
}

/// Raw answers keyed by item id.
pub type RawAnswers = BTreeMap<String, RawAnswer>;
