//! Embedrank library crate (used by the binary and integration tests).
//!
//! Ranks pretrained embedding models by how similar they find paraphrased sentences,
//! turning per-model similarity scores into a total order with TOPSIS.
//!
//! # Public API Surface
//!
//! ## Ranking core
//! - [`CriteriaMatrix`], [`WeightVector`], [`ImpactVector`], [`MatrixBuilder`] - ranking input
//! - [`rank`], [`TopsisRanker`], [`TopsisReport`] - TOPSIS
//! - [`assemble`], [`RankedModel`], [`write_csv`] - presentation and export
//!
//! ## Similarity
//! - [`SimilarityProvider`] - the scoring seam
//! - [`EncoderSimilarity`], [`SentenceEncoder`] - encoder-backed scoring
//! - [`CachedSimilarity`] - memoization
//!
//! ## Orchestration
//! - [`Evaluation`] - score, rank, assemble
//! - [`Config`] - `EMBEDRANK_*` environment configuration
//!
//! ## Test/Mock Support
//! [`MockSimilarityProvider`] is available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod config;
pub mod constants;
pub mod criteria;
pub mod embedding;
pub mod evaluation;
pub mod hashing;
pub mod report;
pub mod similarity;
pub mod topsis;

pub use config::{Config, ConfigError, Roster};
pub use criteria::{
    CriteriaBundle, CriteriaMatrix, CriterionSpec, Impact, ImpactVector, MatrixBuilder,
    ModelEntry, ShapeError, WeightVector,
};
pub use embedding::{EmbeddingError, EncoderConfig, SentenceEncoder};
pub use evaluation::{Evaluation, EvaluationError, EvaluationOutcome, PairCriterion};
pub use report::{
    NameColumn, RankedModel, ReportError, ReportFormat, assemble, save_report, write_csv,
    write_json,
};
#[cfg(any(test, feature = "mock"))]
pub use similarity::MockSimilarityProvider;
pub use similarity::{
    CachedSimilarity, EncoderSimilarity, SentencePair, SimilarityError, SimilarityProvider,
    cosine_similarity,
};
pub use topsis::{DEGENERATE_SCORE, RankedRow, TopsisRanker, TopsisReport, ValidationError, rank};
