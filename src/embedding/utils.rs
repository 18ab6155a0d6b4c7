use std::io;
use std::path::Path;

use tokenizers::{AddedToken, PaddingParams, Tokenizer, TruncationParams};
use tracing::debug;

use crate::constants::{EOS_CANDIDATES, FALLBACK_PAD_TOKEN};

/// Loads `tokenizer.json` from a model directory or an explicit file path.
pub fn load_tokenizer(model_path: &Path) -> io::Result<Tokenizer> {
    let tokenizer_path = if model_path.is_dir() {
        model_path.join("tokenizer.json")
    } else {
        model_path.to_path_buf()
    };

    Tokenizer::from_file(&tokenizer_path).map_err(io::Error::other)
}

/// Loads a tokenizer that truncates at `max_len` tokens and always has a pad token.
pub fn load_encoder_tokenizer(model_path: &Path, max_len: usize) -> io::Result<Tokenizer> {
    let mut tokenizer = load_tokenizer(model_path)?;

    let truncation = TruncationParams {
        max_length: max_len,
        ..Default::default()
    };
    tokenizer
        .with_truncation(Some(truncation))
        .map_err(|e| io::Error::other(format!("Failed to configure truncation: {}", e)))?;

    ensure_pad_token(&mut tokenizer);
    Ok(tokenizer)
}

/// Gives the tokenizer a pad token: keeps an existing one, else reuses EOS, else adds `[PAD]`.
pub fn ensure_pad_token(tokenizer: &mut Tokenizer) {
    if tokenizer.get_padding().is_some() {
        return;
    }

    let eos = EOS_CANDIDATES
        .iter()
        .find_map(|token| tokenizer.token_to_id(token).map(|id| (*token, id)));

    let (pad_token, pad_id) = match eos {
        Some((token, id)) => (token.to_string(), id),
        None => {
            tokenizer.add_special_tokens(&[AddedToken::from(FALLBACK_PAD_TOKEN, true)]);
            match tokenizer.token_to_id(FALLBACK_PAD_TOKEN) {
                Some(id) => (FALLBACK_PAD_TOKEN.to_string(), id),
                None => return,
            }
        }
    };

    debug!(pad_token = %pad_token, pad_id, "Configured pad token");
    tokenizer.with_padding(Some(PaddingParams {
        pad_token,
        pad_id,
        ..Default::default()
    }));
}
