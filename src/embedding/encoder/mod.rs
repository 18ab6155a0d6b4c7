//! Sentence encoder (BERT, RoBERTa or DistilBERT safetensors + tokenizer, mean pooling).
//!
//! Use [`EncoderConfig::stub`] for tests and dry runs without model files.

/// Encoder configuration.
pub mod config;
pub(crate) mod model;


pub use config::EncoderConfig;

use std::sync::Arc;

use candle_core::{Device, Tensor};
use tracing::{debug, info, warn};

use crate::embedding::device::select_device;
use crate::embedding::error::EmbeddingError;
use crate::embedding::utils::load_encoder_tokenizer;
use crate::hashing::{hash_to_u64, hash_token};

use model::{Architecture, TransformerEncoder, read_model_type};

enum EncoderBackend {
    Model {
        model: Arc<TransformerEncoder>,
        tokenizer: Arc<tokenizers::Tokenizer>,
        device: Device,
    },
    Stub {
        salt: u64,
    },
}

/// Turns a sentence into a fixed-size embedding.
pub struct SentenceEncoder {
    backend: EncoderBackend,
    config: EncoderConfig,
}

impl std::fmt::Debug for SentenceEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentenceEncoder")
            .field(
                "backend",
                &match &self.backend {
                    EncoderBackend::Model { device, .. } => format!("Model({:?})", device),
                    EncoderBackend::Stub { .. } => "Stub".to_string(),
                },
            )
            .field("model_dir", &self.config.model_dir)
            .field("max_seq_len", &self.config.max_seq_len)
            .finish()
    }
}

impl SentenceEncoder {
    /// Loads the encoder from a config (stub mode is supported).
    pub fn load(config: EncoderConfig) -> Result<Self, EmbeddingError> {
        config.validate()?;

        if config.testing_stub {
            debug!(salt = %config.stub_salt, "Encoder running in STUB mode");
            return Ok(Self {
                backend: EncoderBackend::Stub {
                    salt: hash_to_u64(config.stub_salt.as_bytes()),
                },
                config,
            });
        }

        if !config.model_available() {
            return Err(EmbeddingError::ModelNotFound {
                path: config.model_dir.clone(),
            });
        }

        let device = select_device()?;
        let config_json = std::fs::read_to_string(config.config_path())?;
        let model_type =
            read_model_type(&config_json).map_err(|e| EmbeddingError::ModelLoadFailed {
                reason: format!("Failed to parse config.json: {}", e),
            })?;

        let Some(architecture) = Architecture::from_model_type(&model_type) else {
            return Err(EmbeddingError::UnsupportedArchitecture { model_type });
        };

        let model =
            TransformerEncoder::load(architecture, &config.model_dir, &config_json, &device)
                .map_err(|e| EmbeddingError::ModelLoadFailed {
                    reason: format!("Failed to load {} weights: {}", model_type, e),
                })?;

        let tokenizer =
            load_encoder_tokenizer(&config.model_dir, config.max_seq_len).map_err(|e| {
                EmbeddingError::TokenizationFailed {
                    reason: format!("Failed to load tokenizer: {}", e),
                }
            })?;

        info!(
            model_dir = %config.model_dir.display(),
            model_type = %model_type,
            architecture = ?architecture,
            hidden_size = model.hidden_size(),
            max_seq_len = config.max_seq_len,
            "Encoder loaded"
        );

        Ok(Self {
            backend: EncoderBackend::Model {
                model: Arc::new(model),
                tokenizer: Arc::new(tokenizer),
                device,
            },
            config,
        })
    }

    /// Encodes one sentence.
    pub fn encode(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        match &self.backend {
            EncoderBackend::Model {
                model,
                tokenizer,
                device,
            } => Self::encode_with_model(text, model, tokenizer, device),
            EncoderBackend::Stub { salt } => Ok(self.encode_stub(text, *salt)),
        }
    }

    fn encode_with_model(
        text: &str,
        model: &TransformerEncoder,
        tokenizer: &tokenizers::Tokenizer,
        device: &Device,
    ) -> Result<Vec<f32>, EmbeddingError> {
        let encoding =
            tokenizer
                .encode(text, true)
                .map_err(|e| EmbeddingError::TokenizationFailed {
                    reason: e.to_string(),
                })?;

        if encoding.get_ids().is_empty() {
            return Err(EmbeddingError::TokenizationFailed {
                reason: "input produced no tokens".to_string(),
            });
        }

        debug!(
            text_len = text.len(),
            token_count = encoding.get_ids().len(),
            "Encoding sentence"
        );

        let input_ids = Tensor::new(encoding.get_ids(), device)?.unsqueeze(0)?;
        let token_type_ids = Tensor::new(encoding.get_type_ids(), device)?.unsqueeze(0)?;
        let attention_mask = Tensor::new(encoding.get_attention_mask(), device)?.unsqueeze(0)?;

        let embedding = model.mean_pooled(&input_ids, &token_type_ids, &attention_mask)?;
        Ok(embedding)
    }

    /// Feature-hashed bag of words: shared words land in shared buckets, so paraphrases
    /// score higher than unrelated text, and the salt gives each encoder its own geometry.
    fn encode_stub(&self, text: &str, salt: u64) -> Vec<f32> {
        let dim = self.config.stub_dim;
        let mut embedding = vec![0.0f32; dim];

        let tokens = text
            .split(|c: char| !c.is_alphanumeric() && c != '%')
            .filter(|t| !t.is_empty())
            .take(self.config.max_seq_len);

        for token in tokens {
            let h = hash_token(salt, &token.to_lowercase());
            let bucket = (h % dim as u64) as usize;
            let sign = if (h >> 63) == 0 { 1.0 } else { -1.0 };
            embedding[bucket] += sign;
        }

        if embedding.iter().all(|v| *v == 0.0) {
            warn!("Stub encoder received text without tokens");
        }

        embedding
    }

    /// Returns `true` if running in stub mode.
    pub fn is_stub(&self) -> bool {
        matches!(self.backend, EncoderBackend::Stub { .. })
    }

    /// Returns the encoder configuration.
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }
}
