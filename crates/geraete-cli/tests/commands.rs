use geraete_checklist::ChecklistWorkflow;
use geraete_cli::commands::{export, list, list_items, missing_prompt, notice_lines, save, show};
use geraete_core::models::{RawAnswer, RawAnswers, RawMeta};
use geraete_export::styles::DocumentStyles;
use geraete_export::{DirectoryExporter, MemoryExporter};
use geraete_storage::{FileStore, MemoryStore};

fn complete_answers() -> RawAnswers {
    ["boot", "keyboard", "touchpad", "screen", "wifi", "storage"]
        .into_iter()
        .map(|id| (id.to_string(), RawAnswer::new("ja", "")))
        .collect()
}

fn meta() -> RawMeta {
    RawMeta::new("NB-0042", "Eva", "2024-05-01")
}

#[test]
fn items_marks_required_entries() {
    let output = list_items(&ChecklistWorkflow::default(), false).unwrap();
    let lines: Vec<&str> = output.text.lines().collect();
    assert_eq!(lines.len(), 9);
    assert!(lines[0].starts_with("boot"));
    assert!(lines[0].ends_with("Gerät startet und erreicht Desktop *"));
    assert!(lines[1].ends_with("Akku lädt und hält Ladung"));
}

#[test]
fn items_as_json() {
    let output = list_items(&ChecklistWorkflow::default(), true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output.text).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 9);
    assert_eq!(value[0]["required"], true);
}

#[test]
fn save_with_open_items_prompts_and_writes_nothing() {
    let workflow = ChecklistWorkflow::default();
    let mut store = MemoryStore::new();
    let mut answers = complete_answers();
    answers.insert("boot".to_string(), RawAnswer::new("n/a", ""));

    let output = save(&workflow, &mut store, &answers, &meta()).unwrap();

    assert!(!output.success);
    assert_eq!(
        output.text,
        "Bitte prüfe folgende Pflichtpunkte:\n• Gerät startet und erreicht Desktop"
    );
    assert!(store.is_empty());
}

#[test]
fn save_then_show_and_list() {
    let dir = tempfile::tempdir().unwrap();
    let workflow = ChecklistWorkflow::default();
    let mut store = FileStore::new(dir.path());

    let output = save(&workflow, &mut store, &complete_answers(), &meta()).unwrap();
    assert!(output.success);
    assert!(output.text.contains("Speicher: geraete-check:NB-0042:2024-05-01"));

    let shown = show(&workflow, &store, "NB-0042", "2024-05-01", false).unwrap();
    assert!(shown.success);
    assert!(shown.text.contains("[Ja] Tastatur funktioniert"));

    let json = show(&workflow, &store, "NB-0042", "2024-05-01", true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json.text).unwrap();
    assert_eq!(value["storageKey"], "geraete-check:NB-0042:2024-05-01");
    assert_eq!(value["meta"]["testerName"], "Eva");

    let listed = list(&store).unwrap();
    assert_eq!(listed.text, "geraete-check:NB-0042:2024-05-01");
}

#[test]
fn show_of_unknown_record_fails() {
    let workflow = ChecklistWorkflow::default();
    let store = MemoryStore::new();
    let output = show(&workflow, &store, "", "2024-05-01", false).unwrap();
    assert!(!output.success);
    assert!(output.text.contains("geraete-check:unbekannt:2024-05-01"));
}

#[test]
fn show_rejects_malformed_date() {
    let workflow = ChecklistWorkflow::default();
    let store = MemoryStore::new();
    assert!(show(&workflow, &store, "NB-1", "gestern", false).is_err());
}

#[test]
fn export_is_not_gated_by_validation() {
    let workflow = ChecklistWorkflow::default();
    let mut exporter = MemoryExporter::new();

    let output = export(&workflow, &mut exporter, &RawAnswers::new(), &meta(), None).unwrap();

    assert!(output.success);
    assert!(output.text.contains("Speicher: (kein lokaler Speicher – Export)"));
    assert!(output.text.contains("Offene Pflichtpunkte:"));
    assert_eq!(exporter.artifacts.len(), 1);
    assert_eq!(exporter.artifacts[0].0, "geraete-check-NB-0042-2024-05-01.json");
}

#[test]
fn export_with_docx_writes_both_files() {
    let dir = tempfile::tempdir().unwrap();
    let workflow = ChecklistWorkflow::default();
    let mut exporter = DirectoryExporter::new(dir.path());
    let styles = DocumentStyles::default();

    let output = export(
        &workflow,
        &mut exporter,
        &complete_answers(),
        &meta(),
        Some(&styles),
    )
    .unwrap();

    assert!(output.text.contains("Protokoll:"));
    assert!(dir.path().join("geraete-check-NB-0042-2024-05-01.json").exists());
    assert!(dir.path().join("geraete-check-NB-0042-2024-05-01.docx").exists());
}

#[test]
fn list_on_empty_store() {
    assert_eq!(
        list(&MemoryStore::new()).unwrap().text,
        "Keine gespeicherten Prüfungen"
    );
}

#[test]
fn prompt_lists_each_title() {
    let text = missing_prompt(&["A".to_string(), "B".to_string()]);
    assert_eq!(text, "Bitte prüfe folgende Pflichtpunkte:\n• A\n• B");
}

#[test]
fn save_reports_replaced_check_date() {
    let workflow = ChecklistWorkflow::default();
    let mut store = MemoryStore::new();
    let meta = RawMeta::new("NB-0042", "Eva", "01.05.2024");

    let output = save(&workflow, &mut store, &complete_answers(), &meta).unwrap();

    assert!(output.success);
    let first_line = output.text.lines().next().unwrap();
    assert!(first_line.starts_with("Hinweis: Prüfdatum \"01.05.2024\" nicht erkannt"));
}

#[test]
fn blocked_save_still_reports_replaced_check_date() {
    let workflow = ChecklistWorkflow::default();
    let mut store = MemoryStore::new();
    let meta = RawMeta::new("NB-0042", "Eva", "morgen");

    let output = save(&workflow, &mut store, &RawAnswers::new(), &meta).unwrap();

    assert!(!output.success);
    assert!(output.text.starts_with("Hinweis: "));
    assert!(output.text.contains("Bitte prüfe folgende Pflichtpunkte:"));
}

#[test]
fn export_reports_replaced_check_date() {
    let workflow = ChecklistWorkflow::default();
    let mut exporter = MemoryExporter::new();
    let meta = RawMeta::new("NB-0042", "Eva", "2024/05/01");

    let output = export(&workflow, &mut exporter, &complete_answers(), &meta, None).unwrap();

    assert!(output.text.starts_with("Hinweis: "));
    assert!(output.text.contains("Exportiert: memory:"));
}

#[test]
fn valid_date_adds_no_notice() {
    assert_eq!(notice_lines(&[]), "");
    let workflow = ChecklistWorkflow::default();
    let mut exporter = MemoryExporter::new();
    let output = export(&workflow, &mut exporter, &complete_answers(), &meta(), None).unwrap();
    assert!(output.text.starts_with("Exportiert: "));
}

#[test]
fn export_of_device_id_with_slash_writes_both_files() {
    let dir = tempfile::tempdir().unwrap();
    let workflow = ChecklistWorkflow::default();
    let mut exporter = DirectoryExporter::new(dir.path());
    let meta = RawMeta::new("Lenovo T480 / #7", "Eva", "2024-05-01");

    let output = export(
        &workflow,
        &mut exporter,
        &complete_answers(),
        &meta,
        Some(&DocumentStyles::default()),
    )
    .unwrap();

    assert!(output.success);
    assert!(output.text.contains("Lenovo T480 / #7"));
    assert!(dir.path().join("geraete-check-Lenovo T480 _ #7-2024-05-01.json").exists());
    assert!(dir.path().join("geraete-check-Lenovo T480 _ #7-2024-05-01.docx").exists());
}
