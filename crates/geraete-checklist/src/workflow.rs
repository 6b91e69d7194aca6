use std::fmt;

use jiff::Zoned;
use jiff::civil::Date;
use serde::Serialize;

use geraete_core::models::meta::parse_check_date;
use geraete_core::models::{
    CheckRecord, CheckResult, ItemResponse, RawAnswer, RawAnswers, RawMeta, SessionMetadata,
};
use geraete_core::storage_keys;
use geraete_export::json::build_artifact;
use geraete_export::ArtifactExporter;
use geraete_storage::KeyValueStore;
use geraete_storage::record::save_record;

use crate::error::WorkflowError;
use crate::schema::ChecklistSchema;

/// Result of a successful export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportOutcome {
    pub file_name: String,
    /// Where the exporter put the artifact.
    pub location: String,
    /// Open required items at export time. Export is not blocked by them.
    pub missing: Vec<String>,
}

/// Something `collect` adjusted on its own that the person filling in the
/// form should be told about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectNotice {
    /// The entered check date could not be read and today was used instead.
    CheckDateReplaced { input: String, used: Date },
}

impl fmt::Display for CollectNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CheckDateReplaced { input, used } => write!(
                f,
                "Prüfdatum \"{input}\" nicht erkannt (erwartet JJJJ-MM-TT), verwende {used}"
            ),
        }
    }
}

/// A collected record together with the notices raised while building it.
#[derive(Debug, Clone, PartialEq)]
pub struct Collected {
    pub record: CheckRecord,
    pub notices: Vec<CollectNotice>,
}

/// Collect → validate → persist or export, over a fixed schema.
///
/// The workflow holds no session state. Every call works only on its
/// arguments; resetting a session means starting again from
/// [`ChecklistWorkflow::empty_answers`].
#[derive(Debug, Clone)]
pub struct ChecklistWorkflow {
    schema: ChecklistSchema,
}

impl ChecklistWorkflow {
    pub fn new(schema: ChecklistSchema) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &ChecklistSchema {
        &self.schema
    }

    /// One blank answer per schema item.
    pub fn empty_answers(&self) -> RawAnswers {
        self.schema
            .items()
            .iter()
            .map(|item| (item.id.clone(), RawAnswer::default()))
            .collect()
    }

    /// Assemble a record from raw form input at the current local time.
    pub fn collect(&self, answers: &RawAnswers, meta: &RawMeta) -> CheckRecord {
        self.collect_at(answers, meta, &Zoned::now())
    }

    /// Assemble a record as of `now`.
    ///
    /// Always yields exactly one response per schema item, in schema order.
    /// Missing answers become empty; an empty or unparsable check date
    /// becomes the calendar date of `now` in its own time zone.
    pub fn collect_at(&self, answers: &RawAnswers, meta: &RawMeta, now: &Zoned) -> CheckRecord {
        self.collect_noticed_at(answers, meta, now).record
    }

    /// Like [`ChecklistWorkflow::collect`], but also reports silent
    /// adjustments such as a replaced check date.
    pub fn collect_noticed(&self, answers: &RawAnswers, meta: &RawMeta) -> Collected {
        self.collect_noticed_at(answers, meta, &Zoned::now())
    }

    pub fn collect_noticed_at(
        &self,
        answers: &RawAnswers,
        meta: &RawMeta,
        now: &Zoned,
    ) -> Collected {
        for id in answers.keys() {
            if self.schema.get(id).is_none() {
                tracing::debug!(item_id = %id, "ignoring answer for unknown item");
            }
        }

        let results = self
            .schema
            .items()
            .iter()
            .map(|item| {
                let (result, notes) = match answers.get(&item.id) {
                    Some(raw) => (CheckResult::from_raw(&raw.result), raw.notes.trim()),
                    None => (CheckResult::Unanswered, ""),
                };
                ItemResponse {
                    id: item.id.clone(),
                    title: item.title.clone(),
                    result,
                    notes: notes.to_string(),
                }
            })
            .collect();

        let mut notices = Vec::new();
        let check_date = resolve_check_date(&meta.check_date, now, &mut notices);
        let record = CheckRecord {
            meta: SessionMetadata {
                device_id: meta.device_id.trim().to_string(),
                tester_name: meta.tester_name.trim().to_string(),
                check_date,
            },
            results,
            timestamp: now.timestamp(),
        };
        Collected { record, notices }
    }

    /// Titles of required items without a `ja`/`nein` answer, in schema order.
    pub fn validate_required(&self, record: &CheckRecord) -> Vec<String> {
        self.schema
            .required_items()
            .filter(|item| {
                !record
                    .response(&item.id)
                    .is_some_and(|response| response.result.is_conclusive())
            })
            .map(|item| item.title.clone())
            .collect()
    }

    pub fn derive_storage_key(&self, record: &CheckRecord) -> String {
        storage_keys::record_key(&record.meta)
    }

    /// The exported record is the record itself.
    pub fn build_export_record(&self, record: &CheckRecord) -> CheckRecord {
        record.clone()
    }

    /// Validate and persist. Nothing is written if a required item is open.
    ///
    /// Returns the storage key. Saving the same device and date again
    /// replaces the earlier record.
    pub fn save<S: KeyValueStore + ?Sized>(
        &self,
        record: &CheckRecord,
        store: &mut S,
    ) -> Result<String, WorkflowError> {
        let missing = self.validate_required(record);
        if !missing.is_empty() {
            tracing::info!(missing = missing.len(), "save blocked by open required items");
            return Err(WorkflowError::MissingRequired(missing));
        }

        let key = self.derive_storage_key(record);
        save_record(store, &key, record)?;
        Ok(key)
    }

    /// Export the record as JSON through `exporter`, whether or not all
    /// required items are answered.
    pub fn export<E: ArtifactExporter + ?Sized>(
        &self,
        record: &CheckRecord,
        exporter: &mut E,
    ) -> Result<ExportOutcome, WorkflowError> {
        let missing = self.validate_required(record);
        if !missing.is_empty() {
            tracing::warn!(
                missing = missing.len(),
                "exporting record with open required items"
            );
        }

        let artifact = build_artifact(&self.build_export_record(record))?;
        let location = exporter.export(&artifact.file_name, &artifact.bytes)?;

        Ok(ExportOutcome {
            file_name: artifact.file_name,
            location,
            missing,
        })
    }
}

impl Default for ChecklistWorkflow {
    fn default() -> Self {
        Self::new(ChecklistSchema::default_device_check())
    }
}

fn resolve_check_date(raw: &str, now: &Zoned, notices: &mut Vec<CollectNotice>) -> Date {
    if raw.trim().is_empty() {
        return now.date();
    }
    match parse_check_date(raw) {
        Ok(date) => date,
        Err(e) => {
            tracing::warn!(error = %e, "falling back to today's date");
            notices.push(CollectNotice::CheckDateReplaced {
                input: raw.trim().to_string(),
                used: now.date(),
            });
            now.date()
        }
    }
}
