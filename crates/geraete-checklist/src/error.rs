use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("duplicate checklist item id: {0}")]
    DuplicateId(String),

    #[error("checklist item at position {0} has an empty id")]
    EmptyId(usize),

    #[error("invalid schema file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("required items not answered: {}", .0.join(", "))]
    MissingRequired(Vec<String>),

    #[error("storage error: {0}")]
    Storage(#[from] geraete_storage::StorageError),

    #[error("export error: {0}")]
    Export(#[from] geraete_export::ExportError),
}
