use candle::{DType, Device, Result, Tensor};
use candle_core as candle;
use candle_nn::VarBuilder;
use candle_transformers::models::{bert, distilbert, xlm_roberta};
use std::path::Path;

/// Transformer family a checkpoint is loaded as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Architecture {
    Bert,
    /// RoBERTa-style position ids (offset past the padding index).
    Roberta,
    DistilBert,
}

impl Architecture {
    /// Maps a Hugging Face `model_type`; `None` for families without a candle backbone here.
    pub(crate) fn from_model_type(model_type: &str) -> Option<Self> {
        match model_type {
            "bert" => Some(Self::Bert),
            "roberta" | "xlm-roberta" | "camembert" => Some(Self::Roberta),
            "distilbert" => Some(Self::DistilBert),
            _ => None,
        }
    }

    /// Tensor prefix used by task-head checkpoints (`roberta.embeddings...`).
    pub(crate) fn weight_prefix(self) -> &'static str {
        match self {
            Self::Bert => "bert",
            Self::Roberta => "roberta",
            Self::DistilBert => "distilbert",
        }
    }
}

/// Reads `model_type` from a Hugging Face `config.json` (defaults to `bert`).
pub(crate) fn read_model_type(config_json: &str) -> std::result::Result<String, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(config_json)?;
    Ok(value
        .get("model_type")
        .and_then(|v| v.as_str())
        .unwrap_or("bert")
        .to_string())
}

/// Parses a RoBERTa-family config, filling `position_embedding_type` which
/// `roberta-base` style configs omit.
pub(crate) fn parse_roberta_config(
    config_json: &str,
) -> std::result::Result<xlm_roberta::Config, serde_json::Error> {
    let mut value: serde_json::Value = serde_json::from_str(config_json)?;
    if let Some(map) = value.as_object_mut() {
        map.entry("position_embedding_type")
            .or_insert_with(|| serde_json::Value::from("absolute"));
    }
    serde_json::from_value(value)
}

enum Backbone {
    Bert(bert::BertModel),
    Roberta(xlm_roberta::XLMRobertaModel),
    DistilBert(distilbert::DistilBertModel),
}

/// Encoder returning the mean-pooled last hidden state.
pub(crate) struct TransformerEncoder {
    backbone: Backbone,
    hidden_size: usize,
}

fn parse_config<T: serde::de::DeserializeOwned>(config_json: &str) -> Result<T> {
    serde_json::from_str(config_json)
        .map_err(|e| candle::Error::Msg(format!("Failed to parse config: {}", e)))
}

impl TransformerEncoder {
    pub(crate) fn load(
        architecture: Architecture,
        model_dir: &Path,
        config_json: &str,
        device: &Device,
    ) -> Result<Self> {
        let weights_path = model_dir.join("model.safetensors");
        let vb =
            unsafe { VarBuilder::from_mmaped_safetensors(&[weights_path], DType::F32, device)? };

        let prefix = architecture.weight_prefix();
        let vb = if vb.contains_tensor(&format!("{prefix}.embeddings.word_embeddings.weight")) {
            vb.pp(prefix)
        } else {
            vb
        };

        let (backbone, hidden_size) = match architecture {
            Architecture::Bert => {
                let config: bert::Config = parse_config(config_json)?;
                (
                    Backbone::Bert(bert::BertModel::load(vb, &config)?),
                    config.hidden_size,
                )
            }
            Architecture::Roberta => {
                let config = parse_roberta_config(config_json)
                    .map_err(|e| candle::Error::Msg(format!("Failed to parse config: {}", e)))?;
                (
                    Backbone::Roberta(xlm_roberta::XLMRobertaModel::new(&config, vb)?),
                    config.hidden_size,
                )
            }
            Architecture::DistilBert => {
                let config: distilbert::Config = parse_config(config_json)?;
                (
                    Backbone::DistilBert(distilbert::DistilBertModel::load(vb, &config)?),
                    config.dim,
                )
            }
        };

        Ok(Self {
            backbone,
            hidden_size,
        })
    }

    pub(crate) fn hidden_size(&self) -> usize {
        self.hidden_size
    }

    /// Runs the encoder and mean-pools the last hidden state over unmasked tokens.
    ///
    /// All inputs are `[1, seq_len]`; the result has `hidden_size` elements.
    pub(crate) fn mean_pooled(
        &self,
        input_ids: &Tensor,
        token_type_ids: &Tensor,
        attention_mask: &Tensor,
    ) -> Result<Vec<f32>> {
        let hidden = match &self.backbone {
            Backbone::Bert(model) => {
                model.forward(input_ids, token_type_ids, Some(attention_mask))?
            }
            Backbone::Roberta(model) => {
                model.forward(input_ids, attention_mask, token_type_ids, None, None, None)?
            }
            Backbone::DistilBert(model) => {
                // DistilBERT masks positions where the mask tensor is set.
                let (batch, seq_len) = attention_mask.dims2()?;
                let padding = attention_mask
                    .eq(0u32)?
                    .reshape((batch, 1, 1, seq_len))?;
                model.forward(input_ids, &padding)?
            }
        };

        let mask = attention_mask.to_dtype(DType::F32)?.unsqueeze(2)?;
        let summed = hidden.broadcast_mul(&mask)?.sum(1)?;
        let counts = mask.sum(1)?;
        summed.broadcast_div(&counts)?.squeeze(0)?.to_vec1::<f32>()
    }
}
