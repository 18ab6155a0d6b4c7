//! BLAKE3-based keys for the similarity memo cache and the stub encoder.

use blake3::Hasher;

use crate::similarity::SentencePair;

/// Computes a 64-bit hash of the input data using BLAKE3, truncated from 256 bits.
///
/// Collisions only matter for cache keys, where a collision costs a recomputation
/// at worst; 64 bits is plenty for the handful of models and pairs evaluated here.
#[inline]
pub fn hash_to_u64(data: &[u8]) -> u64 {
    finalize_u64(&blake3::hash(data))
}

/// Full 32-byte digest of a sentence pair (order-sensitive).
#[inline]
pub fn hash_pair(pair: &SentencePair) -> [u8; 32] {
    let mut hasher = Hasher::new();
    hasher.update(pair.first.as_bytes());
    hasher.update(b"\x1f");
    hasher.update(pair.second.as_bytes());
    *hasher.finalize().as_bytes()
}

/// Memo key for the similarity of `model_id` on `pair`.
#[inline]
pub fn similarity_key(model_id: &str, pair: &SentencePair) -> u64 {
    let mut hasher = Hasher::new();
    hasher.update(model_id.as_bytes());
    hasher.update(b"|");
    hasher.update(&hash_pair(pair));
    finalize_u64(&hasher.finalize())
}

/// Salted token hash used for feature-hashed stub embeddings.
#[inline]
pub fn hash_token(salt: u64, token: &str) -> u64 {
    let mut hasher = Hasher::new();
    hasher.update(&salt.to_le_bytes());
    hasher.update(token.as_bytes());
    finalize_u64(&hasher.finalize())
}

fn finalize_u64(hash: &blake3::Hash) -> u64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&hash.as_bytes()[..8]);
    u64::from_le_bytes(bytes)
}
