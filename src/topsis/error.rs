use thiserror::Error;

/// Ranking input that TOPSIS cannot process.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("criteria matrix has no rows")]
    EmptyMatrix,

    #[error("{what} has length {actual}, expected {expected} (one per criterion)")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("weight for column {column} is negative: {value}")]
    NegativeWeight { column: usize, value: f64 },

    #[error("weight for column {column} is not finite")]
    NonFiniteWeight { column: usize },

    #[error("all weights are zero")]
    AllWeightsZero,

    #[error("column {column} is all zeros; vector normalization is undefined")]
    ZeroColumn { column: usize },
}
