use serde::Serialize;
use tera::{Context, Tera};

use geraete_core::models::{CheckRecord, StoredView};
use geraete_core::storage_keys::UNKNOWN_DEVICE;

use crate::error::ExportError;

/// Plain-text summary shown after saving or exporting.
pub const SUMMARY_TEMPLATE: &str = "\
Geräte-Check
Speicher: {{ storage_key }}
Gerät:    {{ device_id }}
Prüfer:   {{ tester_name }}
Datum:    {{ check_date }}
Erfasst:  {{ timestamp }}

{% for item in items -%}
[{{ item.label }}] {{ item.title }}{% if item.notes %} ({{ item.notes }}){% endif %}
{% endfor -%}
{% if missing %}
Offene Pflichtpunkte:
{% for title in missing -%}
• {{ title }}
{% endfor -%}
{% endif -%}
";

#[derive(Debug, Serialize)]
struct SummaryContext<'a> {
    storage_key: &'a str,
    device_id: &'a str,
    tester_name: &'a str,
    check_date: String,
    timestamp: String,
    items: Vec<SummaryItem<'a>>,
    missing: &'a [String],
}

#[derive(Debug, Serialize)]
struct SummaryItem<'a> {
    title: &'a str,
    label: &'static str,
    notes: &'a str,
}

/// Render a Tera template with any serializable context.
///
/// The context value must serialize to a JSON object; its fields become
/// the template variables.
pub fn render_template<T: Serialize>(
    template_name: &str,
    template_content: &str,
    context: &T,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(context)?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}

/// Human-readable summary of a record.
///
/// `storage_key` is the derived key after a save, or the export marker
/// when the record was only exported. `missing` lists open required items.
pub fn render_summary(
    storage_key: &str,
    record: &CheckRecord,
    missing: &[String],
) -> Result<String, ExportError> {
    let meta = &record.meta;
    let context = SummaryContext {
        storage_key,
        device_id: if meta.device_id.is_empty() {
            UNKNOWN_DEVICE
        } else {
            &meta.device_id
        },
        tester_name: &meta.tester_name,
        check_date: meta.check_date.to_string(),
        timestamp: record.timestamp.to_string(),
        items: record
            .results
            .iter()
            .map(|r| SummaryItem {
                title: &r.title,
                label: r.result.label(),
                notes: &r.notes,
            })
            .collect(),
        missing,
    };
    render_template("summary", SUMMARY_TEMPLATE, &context)
}

/// The stored view as pretty JSON: storage key followed by the record fields.
pub fn render_stored_view(view: &StoredView) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(view)?)
}
