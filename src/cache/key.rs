//! Cache Key Derivation Module
//!
//! Builds a normalized signature for a user message so that differently
//! phrased but semantically similar queries address the same cache entry.
//! Collisions between such queries are intentional.

use crate::cache::Intent;

/// Maximum number of keywords kept in a key.
///
/// Bounds key length and sets the collision granularity.
const MAX_KEYWORDS: usize = 5;

/// Minimum token length kept after normalization. Shorter tokens carry
/// little meaning ("a", "ok", "me").
const MIN_TOKEN_LEN: usize = 3;

// == Stop Words ==
/// Common English function words plus domain filler words ("help", "need",
/// "looking") excluded from key derivation.
const STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "you", "your", "he", "she", "it",
    "they", "what", "which", "who", "this", "that", "these", "those", "am",
    "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
    "do", "does", "did", "will", "would", "could", "should", "may", "might",
    "must", "shall", "can", "need", "to", "of", "in", "for", "on", "with",
    "at", "by", "from", "up", "about", "into", "through", "during", "before",
    "after", "above", "below", "between", "under", "again", "further", "then",
    "once", "here", "there", "when", "where", "why", "how", "all", "each",
    "few", "more", "most", "other", "some", "such", "no", "not", "only",
    "own", "same", "so", "than", "too", "very", "just", "and", "but", "if",
    "or", "because", "as", "until", "while", "the", "a", "an", "please",
    "help", "want", "looking", "find",
];

// == Cache Key ==
/// Derives the cache key for a message.
///
/// Normalization pipeline: lowercase, strip punctuation, tokenize on
/// whitespace, drop short tokens and stop words, sort lexicographically
/// (word-order independence), keep the first five keywords, join with `_`,
/// prefix with the detected intent.
///
/// Deterministic: the same message always yields the same key. A message
/// with no surviving keywords yields `{intent}:` with an empty tail.
pub fn cache_key(message: &str) -> String {
    let intent = Intent::detect(message);

    let normalized: String = message
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();

    let mut tokens: Vec<&str> = normalized
        .split_whitespace()
        .filter(|w| w.len() >= MIN_TOKEN_LEN && !STOP_WORDS.contains(w))
        .collect();

    tokens.sort_unstable();
    tokens.truncate(MAX_KEYWORDS);

    format!("{}:{}", intent, tokens.join("_"))
}
