//! Similarity scoring for one (model, sentence pair) combination.
//!
//! [`SimilarityProvider`] is the seam between model inference and ranking. Providers are
//! explicit handles: [`EncoderSimilarity`] owns its loaded encoders, nothing is global.

pub mod cache;
pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod provider;
pub mod types;


pub use cache::CachedSimilarity;
pub use error::SimilarityError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockSimilarityProvider;
pub use provider::{EncoderSimilarity, LoadFailure, SimilarityProvider, cosine_similarity};
pub use types::SentencePair;
