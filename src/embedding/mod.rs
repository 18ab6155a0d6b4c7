//! Embedding models.
//!
//! - [`encoder`] turns sentences into mean-pooled embeddings.
//! - [`device`] picks CPU / Metal / CUDA.

/// Device selection (CPU / Metal / CUDA).
pub mod device;
/// Sentence encoder.
pub mod encoder;
mod error;
/// Tokenizer loading helpers.
pub mod utils;

pub use encoder::{EncoderConfig, SentenceEncoder};
pub use error::EmbeddingError;
