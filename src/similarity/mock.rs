use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::criteria::ModelEntry;

use super::error::SimilarityError;
use super::provider::SimilarityProvider;
use super::types::SentencePair;

/// Provider returning preset scores; counts calls.
#[derive(Debug, Default)]
pub struct MockSimilarityProvider {
    scores: HashMap<String, f64>,
    pair_scores: HashMap<(String, SentencePair), f64>,
    calls: AtomicUsize,
}

impl MockSimilarityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score for `model_id` on any pair without a pair-specific score.
    pub fn with_score(mut self, model_id: &str, score: f64) -> Self {
        self.scores.insert(model_id.to_string(), score);
        self
    }

    pub fn with_pair_score(mut self, model_id: &str, pair: &SentencePair, score: f64) -> Self {
        self.pair_scores
            .insert((model_id.to_string(), pair.clone()), score);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SimilarityProvider for MockSimilarityProvider {
    fn similarity(&self, model: &ModelEntry, pair: &SentencePair) -> Result<f64, SimilarityError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.pair_scores
            .get(&(model.id.clone(), pair.clone()))
            .or_else(|| self.scores.get(&model.id))
            .copied()
            .ok_or_else(|| SimilarityError::UnknownModel {
                model: model.id.clone(),
            })
    }
}
