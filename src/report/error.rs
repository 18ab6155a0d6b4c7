use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("{models} models but {ranks} ranked rows")]
    RowCountMismatch { models: usize, ranks: usize },

    #[error("ranked row {row_index} has no matching model")]
    UnknownRow { row_index: usize },

    #[error("unknown report format '{value}': expected csv or json")]
    UnknownFormat { value: String },

    #[error("failed to write report to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
