//! Turning command-line input into the workflow's raw answers.

use std::path::Path;

use geraete_core::models::{RawAnswer, RawAnswers};

/// Split `id=value` at the first `=`.
pub fn parse_assignment(arg: &str) -> eyre::Result<(String, String)> {
    let (id, value) = arg
        .split_once('=')
        .ok_or_else(|| eyre::eyre!("expected <item-id>=<value>, got {arg:?}"))?;
    let id = id.trim();
    if id.is_empty() {
        return Err(eyre::eyre!("missing item id in {arg:?}"));
    }
    Ok((id.to_string(), value.to_string()))
}

/// Read a JSON object mapping item id to `{ "result": …, "notes": … }`.
pub fn load_answers_file(path: &Path) -> eyre::Result<RawAnswers> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read answers from {}: {e}", path.display()))?;
    let answers: RawAnswers = serde_json::from_str(&contents)
        .map_err(|e| eyre::eyre!("invalid answers file {}: {e}", path.display()))?;
    Ok(answers)
}

/// Merge the answers file (if any) with `--answer` and `--note` flags.
/// Flags win over file entries for the same item.
pub fn build_raw_answers(
    file: Option<&Path>,
    results: &[String],
    notes: &[String],
) -> eyre::Result<RawAnswers> {
    let mut answers = match file {
        Some(path) => load_answers_file(path)?,
        None => RawAnswers::new(),
    };

    for arg in results {
        let (id, result) = parse_assignment(arg)?;
        answers.entry(id).or_insert_with(RawAnswer::default).result = result;
    }
    for arg in notes {
        let (id, note) = parse_assignment(arg)?;
        answers.entry(id).or_insert_with(RawAnswer::default).notes = note;
    }

    Ok(answers)
}
