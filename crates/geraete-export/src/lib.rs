//! geraete-export
//!
//! Turns a check record into something a person can take away: the JSON
//! export artifact, a plain-text summary (Tera) and a printable DOCX
//! protocol.

pub mod docx;
pub mod error;
pub mod exporter;
pub mod json;
pub mod render;
pub mod styles;

pub use crate::error::ExportError;
pub use crate::exporter::{ArtifactExporter, DirectoryExporter, MemoryExporter};
pub use crate::json::ExportedArtifact;
