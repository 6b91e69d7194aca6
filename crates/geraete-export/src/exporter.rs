use std::path::{Path, PathBuf};

use crate::error::ExportError;

/// Capability for handing a finished artifact to the user.
pub trait ArtifactExporter {
    /// Deliver `bytes` under `name`. Returns where the artifact ended up,
    /// for display.
    fn export(&mut self, name: &str, bytes: &[u8]) -> Result<String, ExportError>;
}

/// Writes artifacts as files into one output directory.
#[derive(Debug, Clone)]
pub struct DirectoryExporter {
    dir: PathBuf,
}

impl DirectoryExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ArtifactExporter for DirectoryExporter {
    fn export(&mut self, name: &str, bytes: &[u8]) -> Result<String, ExportError> {
        check_file_name(name)?;
        std::fs::create_dir_all(&self.dir).map_err(|source| ExportError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.dir.join(name);
        let tmp_path = self.dir.join(format!(".{name}.tmp"));
        std::fs::write(&tmp_path, bytes).map_err(|source| ExportError::Io {
            path: tmp_path.clone(),
            source,
        })?;
        std::fs::rename(&tmp_path, &path).map_err(|source| ExportError::Io {
            path: path.clone(),
            source,
        })?;

        tracing::info!(path = %path.display(), size = bytes.len(), "artifact exported");
        Ok(path.display().to_string())
    }
}

/// Keeps exported artifacts in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryExporter {
    pub artifacts: Vec<(String, Vec<u8>)>,
}

impl MemoryExporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ArtifactExporter for MemoryExporter {
    fn export(&mut self, name: &str, bytes: &[u8]) -> Result<String, ExportError> {
        check_file_name(name)?;
        self.artifacts.push((name.to_string(), bytes.to_vec()));
        Ok(format!("memory:{name}"))
    }
}

/// Artifact names must be a single path component.
fn check_file_name(name: &str) -> Result<(), ExportError> {
    if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(ExportError::InvalidFileName(name.to_string()));
    }
    Ok(())
}
