//! Test fixtures for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use embedrank::{MockSimilarityProvider, ModelEntry};

/// Similarities for the five-model reference scenario (models A through E).
pub const REFERENCE_SIMILARITIES: [(&str, &str, f64); 5] = [
    ("model-a", "A", 0.95),
    ("model-b", "B", 0.80),
    ("model-c", "C", 0.92),
    ("model-d", "D", 0.60),
    ("model-e", "E", 0.85),
];

pub fn reference_models() -> Vec<ModelEntry> {
    REFERENCE_SIMILARITIES
        .iter()
        .map(|(id, name, _)| ModelEntry::new(*id, *name))
        .collect()
}

pub fn reference_provider() -> Arc<MockSimilarityProvider> {
    let provider = REFERENCE_SIMILARITIES
        .iter()
        .fold(MockSimilarityProvider::new(), |p, (id, _, score)| {
            p.with_score(id, *score)
        });
    Arc::new(provider)
}

/// Deterministic pseudo-random matrix rows in `[-1, 1)`.
pub fn seeded_rows(seed: u64, rows: usize, columns: usize) -> Vec<Vec<f64>> {
    let mut state = seed;
    (0..rows)
        .map(|_| {
            (0..columns)
                .map(|_| {
                    state = state
                        .wrapping_mul(6364136223846793005)
                        .wrapping_add(1442695040888963407);
                    ((state >> 11) as f64 / (1u64 << 53) as f64) * 2.0 - 1.0
                })
                .collect()
        })
        .collect()
}
