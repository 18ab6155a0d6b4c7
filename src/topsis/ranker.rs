use std::cmp::Ordering;
use tracing::debug;

use crate::constants::DEGENERATE_SCORE;
use crate::criteria::{CriteriaMatrix, Impact, ImpactVector, WeightVector};

use super::error::ValidationError;
use super::types::{RankedRow, TopsisReport};

/// Ranks every row of `matrix`, returning one [`RankedRow`] per row in row order.
pub fn rank(
    matrix: &CriteriaMatrix,
    weights: &WeightVector,
    impacts: &ImpactVector,
) -> Result<Vec<RankedRow>, ValidationError> {
    Ok(TopsisRanker::new()
        .evaluate(matrix, weights, impacts)?
        .into_ranking())
}

/// Stateless TOPSIS evaluator.
#[derive(Debug, Clone, Copy, Default)]
pub struct TopsisRanker;

impl TopsisRanker {
    /// Creates a ranker.
    pub fn new() -> Self {
        Self
    }

    /// Checks preconditions and returns the Euclidean norm of every column.
    pub fn validate(
        &self,
        matrix: &CriteriaMatrix,
        weights: &WeightVector,
        impacts: &ImpactVector,
    ) -> Result<Vec<f64>, ValidationError> {
        let (rows, columns) = matrix.shape();
        if rows == 0 {
            return Err(ValidationError::EmptyMatrix);
        }

        if weights.len() != columns {
            return Err(ValidationError::LengthMismatch {
                what: "weights",
                expected: columns,
                actual: weights.len(),
            });
        }
        if impacts.len() != columns {
            return Err(ValidationError::LengthMismatch {
                what: "impacts",
                expected: columns,
                actual: impacts.len(),
            });
        }

        for (column, &weight) in weights.as_slice().iter().enumerate() {
            if !weight.is_finite() {
                return Err(ValidationError::NonFiniteWeight { column });
            }
            if weight < 0.0 {
                return Err(ValidationError::NegativeWeight {
                    column,
                    value: weight,
                });
            }
        }
        if weights.as_slice().iter().all(|&w| w == 0.0) {
            return Err(ValidationError::AllWeightsZero);
        }

        (0..columns)
            .map(|column| {
                if matrix.column(column).all(|v| v == 0.0) {
                    return Err(ValidationError::ZeroColumn { column });
                }
                // hypot keeps the norm finite and nonzero for very large or tiny values.
                Ok(matrix.column(column).fold(0.0, f64::hypot))
            })
            .collect()
    }

    /// Runs TOPSIS and keeps every intermediate in the returned report.
    pub fn evaluate(
        &self,
        matrix: &CriteriaMatrix,
        weights: &WeightVector,
        impacts: &ImpactVector,
    ) -> Result<TopsisReport, ValidationError> {
        let norms = self.validate(matrix, weights, impacts)?;
        let (rows, columns) = matrix.shape();
        let weights = weights.as_slice();
        let impacts = impacts.as_slice();

        let mut normalized = Vec::with_capacity(rows * columns);
        let mut weighted = Vec::with_capacity(rows * columns);
        for row in matrix.rows() {
            for (j, value) in row.iter().enumerate() {
                let n = value / norms[j];
                normalized.push(n);
                weighted.push(n * weights[j]);
            }
        }
        let normalized = CriteriaMatrix::from_raw(rows, columns, normalized);
        let weighted = CriteriaMatrix::from_raw(rows, columns, weighted);

        let mut ideal = Vec::with_capacity(columns);
        let mut anti_ideal = Vec::with_capacity(columns);
        for (j, impact) in impacts.iter().enumerate() {
            let (min, max) = weighted
                .column(j)
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                    (lo.min(v), hi.max(v))
                });
            match impact {
                Impact::Benefit => {
                    ideal.push(max);
                    anti_ideal.push(min);
                }
                Impact::Cost => {
                    ideal.push(min);
                    anti_ideal.push(max);
                }
            }
        }

        let distance_to_ideal: Vec<f64> = weighted
            .rows()
            .map(|row| euclidean_distance(row, &ideal))
            .collect();
        let distance_to_anti_ideal: Vec<f64> = weighted
            .rows()
            .map(|row| euclidean_distance(row, &anti_ideal))
            .collect();

        let mut degenerate_rows = Vec::new();
        let scores: Vec<f64> = distance_to_anti_ideal
            .iter()
            .zip(&distance_to_ideal)
            .enumerate()
            .map(|(i, (&d_anti, &d_ideal))| {
                let total = d_anti + d_ideal;
                if total == 0.0 {
                    degenerate_rows.push(i);
                    DEGENERATE_SCORE
                } else {
                    d_anti / total
                }
            })
            .collect();

        if !degenerate_rows.is_empty() {
            debug!(
                count = degenerate_rows.len(),
                "Candidates coincide with both reference points, using neutral score"
            );
        }

        let ranking = assign_ranks(&scores);

        debug!(rows, columns, ?scores, "TOPSIS evaluation complete");

        Ok(TopsisReport {
            normalized,
            weighted,
            ideal,
            anti_ideal,
            distance_to_ideal,
            distance_to_anti_ideal,
            scores,
            degenerate_rows,
            ranking,
        })
    }

    pub fn rank(
        &self,
        matrix: &CriteriaMatrix,
        weights: &WeightVector,
        impacts: &ImpactVector,
    ) -> Result<Vec<RankedRow>, ValidationError> {
        Ok(self.evaluate(matrix, weights, impacts)?.into_ranking())
    }
}

fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x - y).fold(0.0, f64::hypot)
}

/// Descending by score; `sort_by` is stable so equal scores keep row order.
fn assign_ranks(scores: &[f64]) -> Vec<RankedRow> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].partial_cmp(&scores[a]).unwrap_or(Ordering::Equal));

    let mut ranking: Vec<RankedRow> = scores
        .iter()
        .enumerate()
        .map(|(row_index, &score)| RankedRow {
            row_index,
            rank: 0,
            score,
        })
        .collect();
    for (position, row_index) in order.into_iter().enumerate() {
        ranking[row_index].rank = position + 1;
    }
    ranking
}
