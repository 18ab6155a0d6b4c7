use std::collections::HashMap;
use std::str::FromStr;

use tracing::debug;

use super::error::ShapeError;
use super::types::{CriterionSpec, Impact, ModelEntry};

/// Dense row-major matrix of candidate scores (rows = models, columns = criteria).
///
/// Always rectangular, with at least one row and one column, and only finite values.
#[derive(Debug, Clone, PartialEq)]
pub struct CriteriaMatrix {
    rows: usize,
    columns: usize,
    data: Vec<f64>,
}

impl CriteriaMatrix {
    /// Builds a matrix from row vectors.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, ShapeError> {
        let first = rows.first().ok_or(ShapeError::NoModels)?;
        let columns = first.len();
        if columns == 0 {
            return Err(ShapeError::NoCriteria);
        }

        let mut data = Vec::with_capacity(rows.len() * columns);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != columns {
                return Err(ShapeError::RaggedRow {
                    row,
                    expected: columns,
                    actual: values.len(),
                });
            }
            if let Some(column) = values.iter().position(|v| !v.is_finite()) {
                return Err(ShapeError::NonFinite { row, column });
            }
            data.extend_from_slice(values);
        }

        Ok(Self {
            rows: rows.len(),
            columns,
            data,
        })
    }

    /// Single-criterion matrix, one row per value.
    pub fn from_column(values: &[f64]) -> Result<Self, ShapeError> {
        Self::from_rows(values.iter().map(|v| vec![*v]).collect())
    }

    /// Wraps already-validated row-major data.
    pub(crate) fn from_raw(rows: usize, columns: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(rows * columns, data.len());
        Self {
            rows,
            columns,
            data,
        }
    }

    pub fn num_rows(&self) -> usize {
        self.rows
    }

    pub fn num_columns(&self) -> usize {
        self.columns
    }

    /// Returns `(num_rows, num_columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    #[inline]
    pub fn get(&self, row: usize, column: usize) -> f64 {
        self.data[row * self.columns + column]
    }

    #[inline]
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.columns;
        &self.data[start..start + self.columns]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.columns)
    }

    pub fn column(&self, column: usize) -> impl Iterator<Item = f64> + '_ {
        self.data
            .iter()
            .skip(column)
            .step_by(self.columns)
            .copied()
    }
}

/// Relative importance of each criterion. Only relative magnitudes matter.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightVector(Vec<f64>);

impl WeightVector {
    pub fn new(weights: Vec<f64>) -> Self {
        Self(weights)
    }

    /// `len` equal weights of `1.0`.
    pub fn uniform(len: usize) -> Self {
        Self(vec![1.0; len])
    }

    /// Parses a comma-separated list such as `"1,0.5,2"`.
    pub fn parse(list: &str) -> Result<Self, ShapeError> {
        list.split(',')
            .map(|item| {
                item.trim()
                    .parse::<f64>()
                    .map_err(|_| ShapeError::InvalidWeight {
                        value: item.trim().to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for WeightVector {
    fn from(weights: Vec<f64>) -> Self {
        Self(weights)
    }
}

/// Per-criterion direction flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImpactVector(Vec<Impact>);

impl ImpactVector {
    pub fn new(impacts: Vec<Impact>) -> Self {
        Self(impacts)
    }

    /// `len` copies of `impact`.
    pub fn repeat(impact: Impact, len: usize) -> Self {
        Self(vec![impact; len])
    }

    /// Parses a comma-separated list such as `"+,-"` or `"max,min"`.
    pub fn parse(list: &str) -> Result<Self, ShapeError> {
        list.split(',')
            .map(Impact::from_str)
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Impact] {
        &self.0
    }
}

impl From<Vec<Impact>> for ImpactVector {
    fn from(impacts: Vec<Impact>) -> Self {
        Self(impacts)
    }
}

/// Everything one ranking run consumes.
#[derive(Debug, Clone, PartialEq)]
pub struct CriteriaBundle {
    pub matrix: CriteriaMatrix,
    pub weights: WeightVector,
    pub impacts: ImpactVector,
}

/// Assembles a [`CriteriaBundle`] from per-model scores.
#[derive(Debug, Clone)]
pub struct MatrixBuilder {
    criteria: Vec<CriterionSpec>,
}

impl MatrixBuilder {
    pub fn new(criteria: Vec<CriterionSpec>) -> Self {
        Self { criteria }
    }

    pub fn criteria(&self) -> &[CriterionSpec] {
        &self.criteria
    }

    /// Builds the matrix with rows in `models` order.
    ///
    /// `scores` must hold exactly one value per criterion for every model.
    pub fn build(
        &self,
        models: &[ModelEntry],
        scores: &HashMap<String, Vec<f64>>,
    ) -> Result<CriteriaBundle, ShapeError> {
        if self.criteria.is_empty() {
            return Err(ShapeError::NoCriteria);
        }
        if models.is_empty() {
            return Err(ShapeError::NoModels);
        }

        let mut rows = Vec::with_capacity(models.len());
        for (row, model) in models.iter().enumerate() {
            let values = scores.get(&model.id).ok_or_else(|| ShapeError::MissingScore {
                model: model.id.clone(),
                criterion: self.criteria[0].name.clone(),
            })?;

            if values.len() < self.criteria.len() {
                return Err(ShapeError::MissingScore {
                    model: model.id.clone(),
                    criterion: self.criteria[values.len()].name.clone(),
                });
            }
            if values.len() > self.criteria.len() {
                return Err(ShapeError::RaggedRow {
                    row,
                    expected: self.criteria.len(),
                    actual: values.len(),
                });
            }

            rows.push(values.clone());
        }

        let matrix = CriteriaMatrix::from_rows(rows)?;
        let weights = WeightVector::new(self.criteria.iter().map(|c| c.weight).collect());
        let impacts = ImpactVector::new(self.criteria.iter().map(|c| c.impact).collect());

        debug!(
            rows = matrix.num_rows(),
            columns = matrix.num_columns(),
            "Criteria matrix assembled"
        );

        Ok(CriteriaBundle {
            matrix,
            weights,
            impacts,
        })
    }
}
