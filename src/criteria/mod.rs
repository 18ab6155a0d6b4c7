//! Criteria matrix construction.
//!
//! Rows are candidate models, columns are criteria. A [`MatrixBuilder`] turns a total
//! `model -> scores` mapping into a [`CriteriaMatrix`] plus the [`WeightVector`] and
//! [`ImpactVector`] the ranker consumes. Nothing here validates weights or zero columns;
//! that belongs to [`crate::topsis`], which refuses to rank invalid input.

pub mod error;
pub mod matrix;
pub mod types;


pub use error::ShapeError;
pub use matrix::{CriteriaBundle, CriteriaMatrix, ImpactVector, MatrixBuilder, WeightVector};
pub use types::{CriterionSpec, Impact, ModelEntry};
