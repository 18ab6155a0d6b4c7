use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::criteria::ModelEntry;
use crate::embedding::{EmbeddingError, EncoderConfig, SentenceEncoder};

use super::error::SimilarityError;
use super::types::SentencePair;

/// Scores how similar a model finds the two sentences of a pair.
pub trait SimilarityProvider: Send + Sync {
    /// Returns a similarity, in principle within `[-1, 1]`.
    fn similarity(&self, model: &ModelEntry, pair: &SentencePair) -> Result<f64, SimilarityError>;
}

impl<P: SimilarityProvider + ?Sized> SimilarityProvider for std::sync::Arc<P> {
    fn similarity(&self, model: &ModelEntry, pair: &SentencePair) -> Result<f64, SimilarityError> {
        (**self).similarity(model, pair)
    }
}

/// Cosine similarity (`1 - cosine distance`), accumulated in `f64`.
///
/// Returns `0.0` when either vector has zero norm.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f64, SimilarityError> {
    if a.len() != b.len() {
        return Err(SimilarityError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let (mut dot, mut norm_a, mut norm_b) = (0.0f64, 0.0f64, 0.0f64);
    for (&x, &y) in a.iter().zip(b) {
        let (x, y) = (f64::from(x), f64::from(y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }
    Ok(dot / (norm_a.sqrt() * norm_b.sqrt()))
}

/// A model that could not be loaded into the registry.
#[derive(Debug)]
pub struct LoadFailure {
    pub model: ModelEntry,
    pub error: EmbeddingError,
}

/// Registry of loaded encoders, keyed by model id.
#[derive(Debug, Default)]
pub struct EncoderSimilarity {
    encoders: HashMap<String, SentenceEncoder>,
}

impl EncoderSimilarity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `<models_root>/<id>` for every model; failures are returned, not fatal.
    pub fn load(
        models_root: &Path,
        models: &[ModelEntry],
        max_seq_len: usize,
    ) -> (Self, Vec<LoadFailure>) {
        let mut registry = Self::new();
        let mut failures = Vec::new();

        for model in models {
            let config =
                EncoderConfig::for_model(models_root, &model.id).with_max_seq_len(max_seq_len);
            match SentenceEncoder::load(config) {
                Ok(encoder) => registry.insert(&model.id, encoder),
                Err(error) => {
                    warn!(model = %model.id, error = %error, "Skipping model that failed to load");
                    failures.push(LoadFailure {
                        model: model.clone(),
                        error,
                    });
                }
            }
        }

        (registry, failures)
    }

    /// Stub encoders for every model (no model files needed).
    pub fn stub(models: &[ModelEntry], max_seq_len: usize) -> Result<Self, SimilarityError> {
        let mut registry = Self::new();
        for model in models {
            let config = EncoderConfig::stub(model.id.clone()).with_max_seq_len(max_seq_len);
            registry.insert(&model.id, SentenceEncoder::load(config)?);
        }
        Ok(registry)
    }

    pub fn insert(&mut self, model_id: &str, encoder: SentenceEncoder) {
        self.encoders.insert(model_id.to_string(), encoder);
    }

    pub fn contains(&self, model_id: &str) -> bool {
        self.encoders.contains_key(model_id)
    }

    pub fn len(&self) -> usize {
        self.encoders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.encoders.is_empty()
    }
}

impl SimilarityProvider for EncoderSimilarity {
    fn similarity(&self, model: &ModelEntry, pair: &SentencePair) -> Result<f64, SimilarityError> {
        let encoder = self
            .encoders
            .get(&model.id)
            .ok_or_else(|| SimilarityError::UnknownModel {
                model: model.id.clone(),
            })?;

        debug!(model = %model.id, stub = encoder.is_stub(), "Computing similarity");

        let first = encoder.encode(&pair.first)?;
        let second = encoder.encode(&pair.second)?;
        let similarity = cosine_similarity(&first, &second)?;

        if !similarity.is_finite() {
            return Err(SimilarityError::NonFinite {
                model: model.id.clone(),
            });
        }

        info!(model = %model.id, similarity, "Similarity computed");
        Ok(similarity)
    }
}
