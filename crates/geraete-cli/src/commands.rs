//! One function per subcommand. Each returns the text to print so the
//! binary stays a thin dispatcher.

use geraete_checklist::{ChecklistWorkflow, CollectNotice, WorkflowError};
use geraete_core::models::meta::parse_check_date;
use geraete_core::models::{RawAnswers, RawMeta, SessionMetadata, StoredView};
use geraete_core::storage_keys::{EXPORT_MARKER, artifact_file_name, record_key};
use geraete_export::ArtifactExporter;
use geraete_export::docx::generate_protocol;
use geraete_export::render::{render_stored_view, render_summary};
use geraete_export::styles::DocumentStyles;
use geraete_storage::KeyValueStore;
use geraete_storage::record::{list_record_keys, load_record};

/// Text to print and whether the command succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    pub success: bool,
}

impl CommandOutput {
    fn ok(text: String) -> Self {
        Self {
            text,
            success: true,
        }
    }

    fn failed(text: String) -> Self {
        Self {
            text,
            success: false,
        }
    }
}

/// Prompt listing required items that still need a `ja`/`nein`.
pub fn missing_prompt(missing: &[String]) -> String {
    let mut text = String::from("Bitte prüfe folgende Pflichtpunkte:");
    for title in missing {
        text.push_str("\n• ");
        text.push_str(title);
    }
    text
}

/// One `Hinweis:` line per notice, each ending in a newline.
pub fn notice_lines(notices: &[CollectNotice]) -> String {
    notices
        .iter()
        .map(|notice| format!("Hinweis: {notice}\n"))
        .collect()
}

pub fn list_items(workflow: &ChecklistWorkflow, json: bool) -> eyre::Result<CommandOutput> {
    let items = workflow.schema().items();
    if json {
        return Ok(CommandOutput::ok(serde_json::to_string_pretty(items)?));
    }

    let width = items.iter().map(|i| i.id.len()).max().unwrap_or(0);
    let lines: Vec<String> = items
        .iter()
        .map(|item| format!("{:<width$}  {}", item.id, item.display_title()))
        .collect();
    Ok(CommandOutput::ok(lines.join("\n")))
}

/// Collect, validate and store. Open required items block the save.
pub fn save<S: KeyValueStore + ?Sized>(
    workflow: &ChecklistWorkflow,
    store: &mut S,
    answers: &RawAnswers,
    meta: &RawMeta,
) -> eyre::Result<CommandOutput> {
    let collected = workflow.collect_noticed(answers, meta);
    let record = collected.record;
    let mut text = notice_lines(&collected.notices);
    match workflow.save(&record, store) {
        Ok(key) => {
            text.push_str(&render_summary(&key, &record, &[])?);
            Ok(CommandOutput::ok(text))
        }
        Err(WorkflowError::MissingRequired(missing)) => {
            text.push_str(&missing_prompt(&missing));
            Ok(CommandOutput::failed(text))
        }
        Err(e) => Err(e.into()),
    }
}

/// Collect and export, regardless of open required items. With `docx`
/// set, a printable protocol is written next to the JSON file.
pub fn export<E: ArtifactExporter + ?Sized>(
    workflow: &ChecklistWorkflow,
    exporter: &mut E,
    answers: &RawAnswers,
    meta: &RawMeta,
    docx: Option<&DocumentStyles>,
) -> eyre::Result<CommandOutput> {
    let collected = workflow.collect_noticed(answers, meta);
    let record = collected.record;
    let outcome = workflow.export(&record, exporter)?;

    let mut text = notice_lines(&collected.notices);
    text.push_str(&format!("Exportiert: {}\n", outcome.location));
    if let Some(styles) = docx {
        let bytes = generate_protocol(&record, &outcome.missing, styles)?;
        let location = exporter.export(&artifact_file_name(&record.meta, "docx"), &bytes)?;
        text.push_str(&format!("Protokoll:  {location}\n"));
    }
    text.push('\n');
    text.push_str(&render_summary(EXPORT_MARKER, &record, &outcome.missing)?);
    Ok(CommandOutput::ok(text))
}

/// Show a stored record by device id and check date.
pub fn show<S: KeyValueStore + ?Sized>(
    workflow: &ChecklistWorkflow,
    store: &S,
    device_id: &str,
    check_date: &str,
    json: bool,
) -> eyre::Result<CommandOutput> {
    let key = record_key(&SessionMetadata {
        device_id: device_id.trim().to_string(),
        tester_name: String::new(),
        check_date: parse_check_date(check_date)?,
    });

    let Some(record) = load_record(store, &key)? else {
        return Ok(CommandOutput::failed(format!("Kein Eintrag unter {key}")));
    };

    let text = if json {
        render_stored_view(&StoredView::new(key, record))?
    } else {
        let missing = workflow.validate_required(&record);
        render_summary(&key, &record, &missing)?
    };
    Ok(CommandOutput::ok(text))
}

pub fn list<S: KeyValueStore + ?Sized>(store: &S) -> eyre::Result<CommandOutput> {
    let keys = list_record_keys(store)?;
    if keys.is_empty() {
        return Ok(CommandOutput::ok("Keine gespeicherten Prüfungen".to_string()));
    }
    Ok(CommandOutput::ok(keys.join("\n")))
}
