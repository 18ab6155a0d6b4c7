use thiserror::Error;

use crate::embedding::EmbeddingError;

#[derive(Debug, Error)]
pub enum SimilarityError {
    #[error("embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("no encoder registered for model '{model}'")]
    UnknownModel { model: String },

    #[error("embedding dimensions differ: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    #[error("similarity for model '{model}' is not finite")]
    NonFinite { model: String },
}
