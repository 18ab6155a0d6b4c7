//! Cross-cutting, shared constants.
//!
//! The default model roster and sentence pair reproduce the reference evaluation run; every
//! one of them can be overridden through [`crate::config::Config`].

/// Tokenizer truncation length used for both sentences.
pub const DEFAULT_MAX_SEQ_LEN: usize = 128;

/// Capacity of the similarity memo cache.
pub const DEFAULT_CACHE_CAPACITY: u64 = 1024;

/// Closeness score assigned when a candidate coincides with both reference points.
pub const DEGENERATE_SCORE: f64 = 0.5;

/// Default report destination.
pub const DEFAULT_OUTPUT_PATH: &str = "model_ranking.csv";

/// Header row of the CSV report.
pub const CSV_HEADER: [&str; 2] = ["Model Name", "Rank"];

/// First sentence of the default paraphrase pair.
pub const DEFAULT_SENTENCE_A: &str = "The company's revenue has grown by 15% in the last quarter.";

/// Second sentence of the default paraphrase pair.
pub const DEFAULT_SENTENCE_B: &str =
    "There has been a 15% increase in the company's quarterly revenue.";

/// `(identifier, display name)` pairs evaluated when no models file is configured.
pub const DEFAULT_MODELS: [(&str, &str); 5] = [
    ("albert-base-v2", "ALBERT"),
    ("roberta-base", "RoBERTa"),
    (
        "sentence-transformers/bert-base-nli-mean-tokens",
        "Sentence-BERT",
    ),
    ("xlm-roberta-base", "XLM-RoBERTa"),
    ("distilbert-base-uncased", "DistilBERT"),
];

/// Dimension of stub sentence embeddings.
pub const STUB_EMBEDDING_DIM: usize = 384;

/// Token appended to tokenizers that have neither a pad nor an EOS token.
pub const FALLBACK_PAD_TOKEN: &str = "[PAD]";

/// EOS spellings tried when a tokenizer has no pad token.
pub const EOS_CANDIDATES: [&str; 3] = ["</s>", "<|endoftext|>", "<eos>"];
