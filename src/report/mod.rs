//! Result assembly and export.
//!
//! [`assemble`] pairs models with their TOPSIS ranks, best first. The CSV layout
//! (`Model Name,Rank` header, ascending rank) matches files produced by earlier runs.

pub mod error;
pub mod writer;

#[cfg(test)]
mod tests;

pub use error::ReportError;
pub use writer::{NameColumn, ReportFormat, save_report, write_csv, write_json};

use serde::Serialize;

use crate::criteria::ModelEntry;
use crate::topsis::RankedRow;

/// One model's place in the final ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedModel {
    pub model_id: String,
    pub display_name: String,
    pub rank: usize,
    pub score: f64,
}

/// Joins `models` (in matrix row order) with `ranking`, sorted ascending by rank.
pub fn assemble(
    models: &[ModelEntry],
    ranking: &[RankedRow],
) -> Result<Vec<RankedModel>, ReportError> {
    if models.len() != ranking.len() {
        return Err(ReportError::RowCountMismatch {
            models: models.len(),
            ranks: ranking.len(),
        });
    }

    let mut rows = ranking
        .iter()
        .map(|row| {
            let model = models
                .get(row.row_index)
                .ok_or(ReportError::UnknownRow {
                    row_index: row.row_index,
                })?;
            Ok(RankedModel {
                model_id: model.id.clone(),
                display_name: model.display_name.clone(),
                rank: row.rank,
                score: row.score,
            })
        })
        .collect::<Result<Vec<_>, ReportError>>()?;

    rows.sort_by_key(|r| r.rank);
    Ok(rows)
}
