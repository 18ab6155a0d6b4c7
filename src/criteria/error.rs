use thiserror::Error;

/// Inconsistent criteria input, detected before any ranking starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    #[error("criteria matrix has no rows")]
    NoModels,

    #[error("criteria matrix has no columns")]
    NoCriteria,

    #[error("row {row} has {actual} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("model '{model}' has no score for criterion '{criterion}'")]
    MissingScore { model: String, criterion: String },

    #[error("non-finite value at row {row}, column {column}")]
    NonFinite { row: usize, column: usize },

    #[error("unknown impact '{value}': expected one of +, -, max, min, benefit, cost")]
    UnknownImpact { value: String },

    #[error("invalid weight '{value}'")]
    InvalidWeight { value: String },
}
