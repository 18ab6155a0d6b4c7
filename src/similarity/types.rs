use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SENTENCE_A, DEFAULT_SENTENCE_B};

/// Two sentences whose semantic similarity is measured.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SentencePair {
    pub first: String,
    pub second: String,
}

impl SentencePair {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }
}

impl Default for SentencePair {
    fn default() -> Self {
        Self::new(DEFAULT_SENTENCE_A, DEFAULT_SENTENCE_B)
    }
}
