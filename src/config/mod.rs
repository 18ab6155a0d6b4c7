//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `EMBEDRANK_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::path::PathBuf;

use serde::Deserialize;

use crate::constants::{
    DEFAULT_CACHE_CAPACITY, DEFAULT_MAX_SEQ_LEN, DEFAULT_MODELS, DEFAULT_OUTPUT_PATH,
    DEFAULT_SENTENCE_A, DEFAULT_SENTENCE_B,
};
use crate::criteria::{CriterionSpec, Impact, ModelEntry};
use crate::evaluation::PairCriterion;
use crate::report::ReportFormat;
use crate::similarity::SentencePair;

/// Evaluation configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `EMBEDRANK_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory of model checkpoints (`<dir>/<model_id>`). Unset means stub encoders.
    pub models_dir: Option<PathBuf>,

    /// JSON roster overriding the default models and sentence pair.
    pub models_file: Option<PathBuf>,

    /// Report destination. Default: `model_ranking.csv`.
    pub output_path: PathBuf,

    /// Report format. Default: CSV.
    pub output_format: ReportFormat,

    /// Tokenizer truncation length. Default: `128`.
    pub max_seq_len: usize,

    /// Sentence pair used when the roster file has none.
    pub sentence_pair: SentencePair,

    /// Capacity of the similarity memo cache. Default: `1024`.
    pub cache_capacity: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            models_dir: None,
            models_file: None,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            output_format: ReportFormat::Csv,
            max_seq_len: DEFAULT_MAX_SEQ_LEN,
            sentence_pair: SentencePair::new(DEFAULT_SENTENCE_A, DEFAULT_SENTENCE_B),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

/// Models plus the sentence pairs they are scored on.
#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    pub models: Vec<ModelEntry>,
    pub criteria: Vec<PairCriterion>,
}

#[derive(Debug, Deserialize)]
struct RosterFile {
    models: Vec<ModelEntry>,
    #[serde(default)]
    sentence_pairs: Vec<PairEntry>,
}

#[derive(Debug, Deserialize)]
struct PairEntry {
    first: String,
    second: String,
    #[serde(default = "default_weight")]
    weight: f64,
    #[serde(default)]
    name: Option<String>,
}

fn default_weight() -> f64 {
    1.0
}

impl Config {
    const ENV_MODELS_DIR: &'static str = "EMBEDRANK_MODELS_DIR";
    const ENV_MODELS_FILE: &'static str = "EMBEDRANK_MODELS_FILE";
    const ENV_OUTPUT_PATH: &'static str = "EMBEDRANK_OUTPUT_PATH";
    const ENV_OUTPUT_FORMAT: &'static str = "EMBEDRANK_OUTPUT_FORMAT";
    const ENV_MAX_SEQ_LEN: &'static str = "EMBEDRANK_MAX_SEQ_LEN";
    const ENV_SENTENCE_A: &'static str = "EMBEDRANK_SENTENCE_A";
    const ENV_SENTENCE_B: &'static str = "EMBEDRANK_SENTENCE_B";
    const ENV_CACHE_CAPACITY: &'static str = "EMBEDRANK_CACHE_CAPACITY";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let models_dir = Self::parse_optional_path_from_env(Self::ENV_MODELS_DIR);
        let models_file = Self::parse_optional_path_from_env(Self::ENV_MODELS_FILE);
        let output_path = Self::parse_path_from_env(Self::ENV_OUTPUT_PATH, defaults.output_path);
        let output_format = Self::parse_format_from_env(defaults.output_format)?;
        let max_seq_len =
            Self::parse_number_from_env(Self::ENV_MAX_SEQ_LEN, defaults.max_seq_len as u64)?
                as usize;
        let cache_capacity =
            Self::parse_number_from_env(Self::ENV_CACHE_CAPACITY, defaults.cache_capacity)?;
        let sentence_pair = SentencePair::new(
            Self::parse_string_from_env(Self::ENV_SENTENCE_A, defaults.sentence_pair.first),
            Self::parse_string_from_env(Self::ENV_SENTENCE_B, defaults.sentence_pair.second),
        );

        Ok(Self {
            models_dir,
            models_file,
            output_path,
            output_format,
            max_seq_len,
            sentence_pair,
            cache_capacity,
        })
    }

    /// Validates paths and basic invariants (does not create directories).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_seq_len == 0 {
            return Err(ConfigError::ZeroValue {
                name: Self::ENV_MAX_SEQ_LEN,
            });
        }
        if self.cache_capacity == 0 {
            return Err(ConfigError::ZeroValue {
                name: Self::ENV_CACHE_CAPACITY,
            });
        }

        if let Some(ref path) = self.models_dir {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_dir() {
                return Err(ConfigError::NotADirectory { path: path.clone() });
            }
        }

        if let Some(ref path) = self.models_file {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_file() {
                return Err(ConfigError::NotAFile { path: path.clone() });
            }
        }

        if self.output_path.is_dir() {
            return Err(ConfigError::NotAFile {
                path: self.output_path.clone(),
            });
        }

        Ok(())
    }

    /// Returns `true` when no checkpoint directory is configured.
    pub fn is_stub(&self) -> bool {
        self.models_dir.is_none()
    }

    /// Resolves the models and criteria to evaluate.
    ///
    /// Without a roster file this is the default five-model roster scored on
    /// [`Config::sentence_pair`].
    pub fn roster(&self) -> Result<Roster, ConfigError> {
        let Some(ref path) = self.models_file else {
            return Ok(Roster {
                models: DEFAULT_MODELS
                    .iter()
                    .map(|(id, name)| ModelEntry::new(*id, *name))
                    .collect(),
                criteria: vec![self.default_criterion()],
            });
        };

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::RosterRead {
            path: path.clone(),
            source: e,
        })?;
        let file: RosterFile =
            serde_json::from_str(&content).map_err(|e| ConfigError::RosterParse {
                path: path.clone(),
                source: e,
            })?;

        if file.models.is_empty() {
            return Err(ConfigError::EmptyRoster { path: path.clone() });
        }

        let criteria = if file.sentence_pairs.is_empty() {
            vec![self.default_criterion()]
        } else {
            file.sentence_pairs
                .into_iter()
                .enumerate()
                .map(|(i, entry)| {
                    let name = entry.name.unwrap_or_else(|| format!("pair-{}", i + 1));
                    PairCriterion::new(
                        CriterionSpec::new(name, entry.weight, Impact::Benefit),
                        SentencePair::new(entry.first, entry.second),
                    )
                })
                .collect()
        };

        Ok(Roster {
            models: file.models,
            criteria,
        })
    }

    fn default_criterion(&self) -> PairCriterion {
        PairCriterion::new(
            CriterionSpec::benefit("similarity"),
            self.sentence_pair.clone(),
        )
    }

    fn parse_format_from_env(default: ReportFormat) -> Result<ReportFormat, ConfigError> {
        match env::var(Self::ENV_OUTPUT_FORMAT) {
            Ok(value) => value
                .parse()
                .map_err(|_| ConfigError::UnknownOutputFormat { value }),
            Err(_) => Ok(default),
        }
    }

    fn parse_number_from_env(var_name: &'static str, default: u64) -> Result<u64, ConfigError> {
        match env::var(var_name) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|e| ConfigError::InvalidNumber {
                    name: var_name,
                    value,
                    source: e,
                }),
            Err(_) => Ok(default),
        }
    }

    fn parse_path_from_env(var_name: &str, default: PathBuf) -> PathBuf {
        env::var(var_name).map(PathBuf::from).unwrap_or(default)
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(default)
    }
}
