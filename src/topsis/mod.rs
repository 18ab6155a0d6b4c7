//! TOPSIS ranking (Technique for Order of Preference by Similarity to Ideal Solution).
//!
//! Per criterion column the matrix is vector-normalized, weighted, and compared against an
//! ideal and an anti-ideal point. Each candidate's closeness score is
//! `d_anti / (d_anti + d_ideal)`; ranks follow descending score.
//!
//! # Ties
//!
//! Ranks are always a permutation of `1..=n`. Candidates with exactly equal scores keep
//! their input row order and receive consecutive ranks; they never share a rank.
//!
//! # Degenerate input
//!
//! When every weighted row is identical, each candidate sits on both reference points and
//! the closeness formula is `0 / 0`. Those candidates get [`DEGENERATE_SCORE`] instead.

pub mod error;
pub mod ranker;
pub mod types;

#[cfg(test)]
mod tests;

pub use crate::constants::DEGENERATE_SCORE;
pub use error::ValidationError;
pub use ranker::{TopsisRanker, rank};
pub use types::{RankedRow, TopsisReport};
