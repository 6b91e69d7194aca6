use geraete_cli::input::{build_raw_answers, parse_assignment};
use geraete_core::models::RawAnswer;

#[test]
fn assignment_splits_at_first_equals() {
    assert_eq!(
        parse_assignment("boot=ja").unwrap(),
        ("boot".to_string(), "ja".to_string())
    );
    assert_eq!(
        parse_assignment("ports=Netzteil=wackelt").unwrap(),
        ("ports".to_string(), "Netzteil=wackelt".to_string())
    );
    assert!(parse_assignment("boot").is_err());
    assert!(parse_assignment("=ja").is_err());
}

#[test]
fn flags_override_answers_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("answers.json");
    std::fs::write(
        &path,
        r#"{
            "boot": {"result": "nein", "notes": "bleibt im BIOS"},
            "wifi": {"result": "ja"}
        }"#,
    )
    .unwrap();

    let answers = build_raw_answers(
        Some(path.as_path()),
        &["boot=ja".to_string()],
        &["screen=Kratzer oben links".to_string()],
    )
    .unwrap();

    assert_eq!(answers["boot"], RawAnswer::new("ja", "bleibt im BIOS"));
    assert_eq!(answers["wifi"], RawAnswer::new("ja", ""));
    assert_eq!(answers["screen"], RawAnswer::new("", "Kratzer oben links"));
}

#[test]
fn unreadable_answers_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(build_raw_answers(Some(dir.path().join("missing.json").as_path()), &[], &[]).is_err());

    let bad = dir.path().join("bad.json");
    std::fs::write(&bad, "[1, 2]").unwrap();
    assert!(build_raw_answers(Some(bad.as_path()), &[], &[]).is_err());
}
