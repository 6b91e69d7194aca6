use geraete_core::models::CheckRecord;
use geraete_core::storage_keys::{EXPORT_MEDIA_TYPE, export_file_name};

use crate::error::ExportError;

/// A file ready to hand to an [`ArtifactExporter`](crate::ArtifactExporter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedArtifact {
    pub file_name: String,
    pub media_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Serialize a record as the downloadable JSON artifact.
///
/// The body is the record verbatim (no storage key), pretty-printed with
/// 2-space indentation.
pub fn build_artifact(record: &CheckRecord) -> Result<ExportedArtifact, ExportError> {
    Ok(ExportedArtifact {
        file_name: export_file_name(&record.meta),
        media_type: EXPORT_MEDIA_TYPE,
        bytes: record.to_json_pretty()?,
    })
}
