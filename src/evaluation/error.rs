use thiserror::Error;

use crate::criteria::ShapeError;
use crate::report::ReportError;
use crate::similarity::SimilarityError;
use crate::topsis::ValidationError;

#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("similarity scoring failed for model '{model}': {source}")]
    Similarity {
        model: String,
        #[source]
        source: SimilarityError,
    },

    #[error("invalid criteria shape: {0}")]
    Shape(#[from] ShapeError),

    #[error("invalid ranking input: {0}")]
    Validation(#[from] ValidationError),

    #[error("report assembly failed: {0}")]
    Report(#[from] ReportError),

    #[error("scoring task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
