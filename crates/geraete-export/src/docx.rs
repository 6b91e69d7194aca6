use std::io::Cursor;

use docx_rs::{
    AlignmentType, Docx, Paragraph, Run, RunFonts, Style, StyleType, Table, TableCell, TableRow,
};

use geraete_core::models::CheckRecord;
use geraete_core::storage_keys::UNKNOWN_DEVICE;

use crate::error::ExportError;
use crate::styles::DocumentStyles;

/// Generate a printable inspection protocol.
///
/// Layout:
/// - title and metadata lines (device, tester, date)
/// - one table row per item: title, result label, notes
/// - list of open required items, if any
pub fn generate_protocol(
    record: &CheckRecord,
    missing: &[String],
    styles: &DocumentStyles,
) -> Result<Vec<u8>, ExportError> {
    let meta = &record.meta;
    let device = if meta.device_id.is_empty() {
        UNKNOWN_DEVICE
    } else {
        &meta.device_id
    };

    let mut docx = Docx::new()
        .add_style(heading_style("Title", "title", styles.title_size))
        .add_style(heading_style("Heading1", "heading 1", styles.heading_size))
        .add_paragraph(heading_paragraph("Geräte-Check Prüfprotokoll", "Title", styles))
        .add_paragraph(labelled_line("Gerät", device, styles))
        .add_paragraph(labelled_line("Prüfer", &meta.tester_name, styles))
        .add_paragraph(labelled_line("Datum", &meta.check_date.to_string(), styles))
        .add_paragraph(Paragraph::new())
        .add_paragraph(heading_paragraph("Prüfpunkte", "Heading1", styles));

    let mut rows = vec![TableRow::new(vec![
        cell("Prüfpunkt", true, styles),
        cell("Ergebnis", true, styles),
        cell("Bemerkung", true, styles),
    ])];
    for response in &record.results {
        rows.push(TableRow::new(vec![
            cell(&response.title, false, styles),
            cell(response.result.label(), false, styles),
            cell(&response.notes, false, styles),
        ]));
    }
    docx = docx.add_table(Table::new(rows));

    if !missing.is_empty() {
        docx = docx
            .add_paragraph(Paragraph::new())
            .add_paragraph(heading_paragraph("Offene Pflichtpunkte", "Heading1", styles));
        for title in missing {
            docx = docx.add_paragraph(
                Paragraph::new()
                    .align(AlignmentType::Left)
                    .add_run(body_run(&format!("\u{2022} {title}"), styles)),
            );
        }
    }

    docx = docx.add_paragraph(Paragraph::new()).add_paragraph(
        Paragraph::new().add_run(body_run(&format!("Erfasst: {}", record.timestamp), styles)),
    );

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    tracing::debug!(size = buf.get_ref().len(), "protocol generated");
    Ok(buf.into_inner())
}

fn heading_style(style_id: &str, name: &str, size_pt: usize) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2) // OOXML uses half-points
}

fn heading_paragraph(text: &str, style_id: &str, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new().style(style_id).add_run(
        Run::new()
            .add_text(text)
            .bold()
            .fonts(RunFonts::new().ascii(&styles.heading_font)),
    )
}

fn body_run(text: &str, styles: &DocumentStyles) -> Run {
    Run::new()
        .add_text(text)
        .size(styles.body_size * 2)
        .fonts(RunFonts::new().ascii(&styles.body_font))
}

fn labelled_line(label: &str, value: &str, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new()
        .align(AlignmentType::Left)
        .add_run(body_run(&format!("{label}: "), styles).bold())
        .add_run(body_run(value, styles))
}

fn cell(text: &str, header: bool, styles: &DocumentStyles) -> TableCell {
    let run = if header {
        body_run(text, styles).bold()
    } else {
        body_run(text, styles)
    };
    TableCell::new().add_paragraph(Paragraph::new().add_run(run))
}
