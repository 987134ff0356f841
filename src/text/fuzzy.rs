//! Lexical fuzzy similarity provider.

use rapidfuzz::distance::indel;

/// Approximate lexical similarity between two strings.
///
/// Implementations must be symmetric, token-order-insensitive, and
/// return an integer ratio in 0..=100.
pub trait FuzzyScorer: Send + Sync {
    fn ratio(&self, a: &str, b: &str) -> u32;
}

/// Token-sort ratio: sort whitespace tokens alphabetically, rejoin,
/// then score with the normalized indel ratio. Robust to word
/// reordering and minor spelling variance.
pub struct TokenSortScorer;

fn token_sort(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

impl FuzzyScorer for TokenSortScorer {
    fn ratio(&self, a: &str, b: &str) -> u32 {
        let a = token_sort(a);
        let b = token_sort(b);
        (indel::normalized_similarity(a.chars(), b.chars()) * 100.0).round() as u32
    }
}
