//! End-to-end evaluation: score every model on every criterion, then rank.
//!
//! Scoring may run concurrently ([`Evaluation::run_concurrent`]), but ranking only starts
//! once the full criteria matrix is assembled.

pub mod error;


pub use error::EvaluationError;

use std::collections::HashMap;
use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{debug, info};

use crate::criteria::{CriteriaBundle, CriterionSpec, MatrixBuilder, ModelEntry};
use crate::report::{RankedModel, assemble};
use crate::similarity::{SentencePair, SimilarityProvider};
use crate::topsis::{TopsisRanker, TopsisReport};

/// A criterion column scored by measuring similarity on one sentence pair.
#[derive(Debug, Clone, PartialEq)]
pub struct PairCriterion {
    pub spec: CriterionSpec,
    pub pair: SentencePair,
}

impl PairCriterion {
    pub fn new(spec: CriterionSpec, pair: SentencePair) -> Self {
        Self { spec, pair }
    }
}

/// Everything one evaluation produced.
#[derive(Debug, Clone)]
pub struct EvaluationOutcome {
    /// Raw scores, one vector per model id in criterion order.
    pub scores: HashMap<String, Vec<f64>>,
    pub criteria: CriteriaBundle,
    pub topsis: TopsisReport,
    /// Models best first.
    pub ranked: Vec<RankedModel>,
}

pub struct Evaluation<P> {
    models: Vec<ModelEntry>,
    criteria: Vec<PairCriterion>,
    provider: Arc<P>,
    ranker: TopsisRanker,
}

impl<P> std::fmt::Debug for Evaluation<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Evaluation")
            .field("models", &self.models.len())
            .field("criteria", &self.criteria.len())
            .finish()
    }
}

impl<P: SimilarityProvider + 'static> Evaluation<P> {
    pub fn new(models: Vec<ModelEntry>, criteria: Vec<PairCriterion>, provider: Arc<P>) -> Self {
        Self {
            models,
            criteria,
            provider,
            ranker: TopsisRanker::new(),
        }
    }

    /// One benefit criterion on a single pair, as in the reference evaluation.
    pub fn single_pair(models: Vec<ModelEntry>, pair: SentencePair, provider: Arc<P>) -> Self {
        Self::new(
            models,
            vec![PairCriterion::new(CriterionSpec::benefit("similarity"), pair)],
            provider,
        )
    }

    pub fn models(&self) -> &[ModelEntry] {
        &self.models
    }

    pub fn criteria(&self) -> &[PairCriterion] {
        &self.criteria
    }

    /// Scores every model sequentially, then ranks.
    pub fn run(&self) -> Result<EvaluationOutcome, EvaluationError> {
        let mut scores = HashMap::with_capacity(self.models.len());
        for model in &self.models {
            let row = score_model(self.provider.as_ref(), model, &self.criteria)?;
            scores.insert(model.id.clone(), row);
        }
        self.rank(scores)
    }

    /// Scores models concurrently on the blocking pool, then ranks.
    pub async fn run_concurrent(&self) -> Result<EvaluationOutcome, EvaluationError> {
        let mut tasks = JoinSet::new();
        for model in self.models.iter().cloned() {
            let provider = Arc::clone(&self.provider);
            let criteria = self.criteria.clone();
            tasks.spawn_blocking(move || {
                let row = score_model(provider.as_ref(), &model, &criteria);
                (model.id, row)
            });
        }

        let mut scores = HashMap::with_capacity(self.models.len());
        while let Some(joined) = tasks.join_next().await {
            let (model_id, row) = joined?;
            scores.insert(model_id, row?);
        }

        debug!(models = scores.len(), "All scoring tasks finished");
        self.rank(scores)
    }

    fn rank(
        &self,
        scores: HashMap<String, Vec<f64>>,
    ) -> Result<EvaluationOutcome, EvaluationError> {
        let specs = self.criteria.iter().map(|c| c.spec.clone()).collect();
        let criteria = MatrixBuilder::new(specs).build(&self.models, &scores)?;

        let topsis = self
            .ranker
            .evaluate(&criteria.matrix, &criteria.weights, &criteria.impacts)?;
        let ranked = assemble(&self.models, &topsis.ranking)?;

        for row in &ranked {
            info!(
                rank = row.rank,
                model = %row.model_id,
                score = row.score,
                "Ranked"
            );
        }

        Ok(EvaluationOutcome {
            scores,
            criteria,
            topsis,
            ranked,
        })
    }
}

fn score_model<P: SimilarityProvider + ?Sized>(
    provider: &P,
    model: &ModelEntry,
    criteria: &[PairCriterion],
) -> Result<Vec<f64>, EvaluationError> {
    criteria
        .iter()
        .map(|criterion| {
            provider
                .similarity(model, &criterion.pair)
                .map_err(|source| EvaluationError::Similarity {
                    model: model.id.clone(),
                    source,
                })
        })
        .collect()
}
