//! Semantic similarity provider and the precomputed phrase index.
//!
//! The embedding provider is an injected dependency: production code
//! uses the deterministic hashed n-gram embedder below, tests inject
//! fakes. Cosine similarity over the precomputed index approximates
//! semantic closeness between a query and each canonical phrase.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use thiserror::Error;

/// Error raised by an embedding provider for a single call.
///
/// Per-call failures degrade to the fuzzy stage; only failures while
/// building the phrase index at startup are fatal.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("embedding provider unavailable: {0}")]
    Unavailable(String),
}

/// Maps text to a fixed-length vector used for semantic comparison.
pub trait EmbeddingProvider: Send + Sync {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;
}

/// Deterministic bag-of-features embedder: word unigrams plus
/// character trigrams hashed into a fixed-dimension vector, then
/// L2-normalized. Word features are weighted above trigram features so
/// exact word overlap dominates spelling overlap.
pub struct HashedNgramEmbedder {
    dim: usize,
}

const WORD_WEIGHT: f32 = 1.0;
const TRIGRAM_WEIGHT: f32 = 0.5;

impl HashedNgramEmbedder {
    pub fn new(dim: usize) -> Self {
        Self { dim: dim.max(1) }
    }

    fn bucket(&self, feature: &str) -> usize {
        // DefaultHasher::new() uses fixed keys, so buckets are stable
        // across processes and the phrase index is reproducible.
        let mut hasher = DefaultHasher::new();
        feature.hash(&mut hasher);
        (hasher.finish() % self.dim as u64) as usize
    }
}

impl EmbeddingProvider for HashedNgramEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let mut vector = vec![0.0f32; self.dim];

        for token in text.split_whitespace() {
            vector[self.bucket(token)] += WORD_WEIGHT;

            let chars: Vec<char> = token.chars().collect();
            for trigram in chars.windows(3) {
                let feature: String = trigram.iter().collect();
                vector[self.bucket(&feature)] += TRIGRAM_WEIGHT;
            }
        }

        let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in &mut vector {
                *v /= norm;
            }
        }

        Ok(vector)
    }
}

/// Precomputed embedding corpus over the ordered canonical vocabulary.
///
/// Built once at engine construction and immutable afterwards, so it
/// can be shared freely across concurrent requests.
pub struct PhraseIndex {
    vectors: Vec<Vec<f32>>,
}

impl PhraseIndex {
    /// Embed every canonical phrase in vocabulary order.
    ///
    /// # Errors
    /// Returns an error if the provider fails on any phrase; that is a
    /// startup integrity failure and must abort initialization.
    pub fn build(embedder: &dyn EmbeddingProvider, phrases: &[String]) -> Result<Self, EmbeddingError> {
        let mut vectors = Vec::with_capacity(phrases.len());
        for phrase in phrases {
            vectors.push(embedder.embed(phrase)?);
        }
        Ok(Self { vectors })
    }

    /// Find the phrase closest to the query vector.
    ///
    /// Returns the vocabulary index and cosine similarity in [0, 1].
    /// Ties resolve to the first phrase in vocabulary order (strict
    /// comparison), so repeated calls are deterministic.
    pub fn nearest(&self, query: &[f32]) -> Option<(usize, f32)> {
        let mut best: Option<(usize, f32)> = None;
        for (idx, vector) in self.vectors.iter().enumerate() {
            let Some(similarity) = cosine_similarity(query, vector) else {
                continue;
            };
            let similarity = similarity.clamp(0.0, 1.0);
            if best.is_none_or(|(_, top)| similarity > top) {
                best = Some((idx, similarity));
            }
        }
        best
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}

/// Cosine similarity between two vectors, or `None` when either vector
/// is zero-length, zero-norm, or the dimensions disagree.
fn cosine_similarity(a: &[f32], b: &[f32]) -> Option<f32> {
    if a.len() != b.len() || a.is_empty() {
        return None;
    }

    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;
    for (&x, &y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom <= f32::EPSILON {
        return None;
    }
    Some(dot / denom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedder_is_deterministic_and_normalized() {
        let embedder = HashedNgramEmbedder::new(128);
        let a = embedder.embed("thank you very much").unwrap();
        let b = embedder.embed("thank you very much").unwrap();
        assert_eq!(a, b);

        let norm: f32 = a.iter().map(|v| v * v).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_self_similarity_is_one() {
        let embedder = HashedNgramEmbedder::new(128);
        let v = embedder.embed("hello").unwrap();
        let sim = cosine_similarity(&v, &v).unwrap();
        assert!((sim - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_related_text_scores_above_unrelated() {
        let embedder = HashedNgramEmbedder::new(256);
        let query = embedder.embed("thank you so much").unwrap();
        let related = embedder.embed("thank you").unwrap();
        let unrelated = embedder.embed("good morning").unwrap();

        let related_sim = cosine_similarity(&query, &related).unwrap();
        let unrelated_sim = cosine_similarity(&query, &unrelated).unwrap();
        assert!(related_sim > unrelated_sim);
    }

    #[test]
    fn test_nearest_prefers_first_on_tie() {
        let embedder = HashedNgramEmbedder::new(64);
        // Identical phrases produce identical vectors; the strict
        // comparison must keep the earlier index.
        let phrases = vec!["hello".to_string(), "hello".to_string()];
        let index = PhraseIndex::build(&embedder, &phrases).unwrap();

        let query = embedder.embed("hello").unwrap();
        let (idx, sim) = index.nearest(&query).unwrap();
        assert_eq!(idx, 0);
        assert!((sim - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_zero_query_has_no_neighbor() {
        let embedder = HashedNgramEmbedder::new(64);
        let phrases = vec!["hello".to_string()];
        let index = PhraseIndex::build(&embedder, &phrases).unwrap();
        assert_eq!(index.nearest(&[0.0; 64]), None);
    }
}
