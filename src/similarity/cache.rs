use moka::sync::Cache;
use tracing::debug;

use crate::constants::DEFAULT_CACHE_CAPACITY;
use crate::criteria::ModelEntry;
use crate::hashing::similarity_key;

use super::error::SimilarityError;
use super::provider::SimilarityProvider;
use super::types::SentencePair;

/// Memoizes another provider's scores, keyed by model id and sentence pair.
///
/// Errors are not cached.
pub struct CachedSimilarity<P> {
    inner: P,
    scores: Cache<u64, f64>,
}

impl<P> std::fmt::Debug for CachedSimilarity<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedSimilarity")
            .field("entries", &self.scores.entry_count())
            .finish()
    }
}

impl<P: SimilarityProvider> CachedSimilarity<P> {
    pub fn new(inner: P) -> Self {
        Self::with_capacity(inner, DEFAULT_CACHE_CAPACITY)
    }

    pub fn with_capacity(inner: P, capacity: u64) -> Self {
        Self {
            inner,
            scores: Cache::builder().max_capacity(capacity).build(),
        }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// Number of memoized scores (approximate while evictions are pending).
    pub fn len(&self) -> u64 {
        self.scores.run_pending_tasks();
        self.scores.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.scores.invalidate_all();
    }
}

impl<P: SimilarityProvider> SimilarityProvider for CachedSimilarity<P> {
    fn similarity(&self, model: &ModelEntry, pair: &SentencePair) -> Result<f64, SimilarityError> {
        let key = similarity_key(&model.id, pair);
        if let Some(score) = self.scores.get(&key) {
            debug!(model = %model.id, "Similarity cache hit");
            return Ok(score);
        }

        let score = self.inner.similarity(model, pair)?;
        self.scores.insert(key, score);
        Ok(score)
    }
}
