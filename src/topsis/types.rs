use serde::Serialize;

use crate::criteria::CriteriaMatrix;

/// Rank assigned to one input row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedRow {
    /// Zero-based row index in the criteria matrix.
    pub row_index: usize,
    /// One-based rank, `1` is most preferred.
    pub rank: usize,
    /// Closeness score in `[0, 1]`.
    pub score: f64,
}

/// Every intermediate of one TOPSIS run.
#[derive(Debug, Clone)]
pub struct TopsisReport {
    /// Column-wise vector-normalized matrix.
    pub normalized: CriteriaMatrix,
    /// `normalized` scaled by the weights.
    pub weighted: CriteriaMatrix,
    /// Best weighted value per column, honoring impacts.
    pub ideal: Vec<f64>,
    /// Worst weighted value per column, honoring impacts.
    pub anti_ideal: Vec<f64>,
    pub distance_to_ideal: Vec<f64>,
    pub distance_to_anti_ideal: Vec<f64>,
    /// Closeness score per row.
    pub scores: Vec<f64>,
    /// Rows that coincided with both reference points.
    pub degenerate_rows: Vec<usize>,
    /// Ranks in row order.
    pub ranking: Vec<RankedRow>,
}

impl TopsisReport {
    pub fn into_ranking(self) -> Vec<RankedRow> {
        self.ranking
    }

    /// Ranks in row order (`ranks()[i]` is the rank of row `i`).
    pub fn ranks(&self) -> Vec<usize> {
        self.ranking.iter().map(|r| r.rank).collect()
    }

    /// Row indices from best to worst.
    pub fn order(&self) -> Vec<usize> {
        let mut order: Vec<&RankedRow> = self.ranking.iter().collect();
        order.sort_by_key(|r| r.rank);
        order.into_iter().map(|r| r.row_index).collect()
    }

    pub fn is_degenerate(&self) -> bool {
        !self.degenerate_rows.is_empty()
    }
}
