use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid check date '{value}': {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: jiff::Error,
    },
}
