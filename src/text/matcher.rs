//! Two-stage phrase matching: embedding similarity with a lexical
//! fuzzy fallback.
//!
//! The engine is an explicitly constructed context object: built once
//! at startup, immutable afterwards, shared by reference across
//! requests. Expected degradation (a failing embedding call, no phrase
//! above threshold) is represented as data, never as a propagated
//! fault.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::Vocabulary;

use super::embedding::{EmbeddingProvider, PhraseIndex};
use super::fuzzy::FuzzyScorer;

/// Which stage produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMethod {
    Embedding,
    Fuzzy,
    None,
}

/// Outcome of phrase matching.
///
/// The score scale depends on the method: embedding scores are cosine
/// similarity in [0, 1], fuzzy scores are an integer ratio in
/// [0, 100]. The two scales are intentionally not reconciled;
/// downstream consumers depend on the raw values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub method: MatchMethod,
    pub phrase: String,
    pub score: f64,
}

impl MatchResult {
    /// The no-match result: `{none, "", 0}`.
    pub fn none() -> Self {
        Self { method: MatchMethod::None, phrase: String::new(), score: 0.0 }
    }

    pub fn is_match(&self) -> bool {
        self.method != MatchMethod::None
    }
}

/// Phrase matcher holding the canonical vocabulary, both similarity
/// providers, and the precomputed phrase-embedding index.
pub struct SimilarityEngine {
    vocabulary: Vocabulary,
    embedder: Box<dyn EmbeddingProvider>,
    index: PhraseIndex,
    scorer: Box<dyn FuzzyScorer>,
    embedding_threshold: f32,
    fuzzy_threshold: u32,
}

impl SimilarityEngine {
    /// Build the engine, precomputing the phrase-embedding index.
    ///
    /// # Errors
    /// Returns an error if the vocabulary is empty or any canonical
    /// phrase cannot be embedded. Both are startup integrity failures
    /// and must abort before any request is served.
    pub fn new(
        vocabulary: Vocabulary,
        embedder: Box<dyn EmbeddingProvider>,
        scorer: Box<dyn FuzzyScorer>,
        embedding_threshold: f32,
        fuzzy_threshold: u32,
    ) -> Result<Self> {
        if vocabulary.is_empty() {
            anyhow::bail!("canonical phrase vocabulary is empty");
        }

        let index = PhraseIndex::build(embedder.as_ref(), vocabulary.phrases())
            .map_err(|e| anyhow::anyhow!("failed to build phrase-embedding index: {}", e))?;

        debug!("Phrase index built: {} phrases", index.len());

        Ok(Self { vocabulary, embedder, index, scorer, embedding_threshold, fuzzy_threshold })
    }

    /// The ordered canonical vocabulary this engine matches against.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Find the best canonical phrase for already-normalized text.
    ///
    /// Stage 1 (embedding) runs first; a result at or above the
    /// embedding threshold wins regardless of fuzzy scores. Stage 2
    /// (fuzzy) runs only when stage 1 misses or degrades. When neither
    /// stage reaches its threshold the result is `{none, "", 0}`.
    pub fn best_match(&self, normalized: &str) -> MatchResult {
        if normalized.is_empty() {
            return MatchResult::none();
        }

        if let Some(hit) = self.semantic_stage(normalized) {
            return hit;
        }
        if let Some(hit) = self.fuzzy_stage(normalized) {
            return hit;
        }
        MatchResult::none()
    }

    /// Stage 1: embedding similarity against the precomputed index.
    ///
    /// A provider failure is logged and treated as a miss so control
    /// falls through to the fuzzy stage; it never reaches the caller.
    fn semantic_stage(&self, text: &str) -> Option<MatchResult> {
        let query = match self.embedder.embed(text) {
            Ok(vector) => vector,
            Err(e) => {
                warn!("Embedding stage degraded, falling back to fuzzy: {}", e);
                return None;
            }
        };

        let (idx, similarity) = self.index.nearest(&query)?;
        debug!("Embedding stage: best \"{}\" at {:.3}", self.vocabulary.phrases()[idx], similarity);

        if similarity >= self.embedding_threshold {
            return Some(MatchResult {
                method: MatchMethod::Embedding,
                phrase: self.vocabulary.phrases()[idx].clone(),
                score: f64::from(similarity),
            });
        }
        None
    }

    /// Stage 2: token-sort fuzzy ratio against every phrase. Ties keep
    /// the first phrase in vocabulary order (strict comparison).
    fn fuzzy_stage(&self, text: &str) -> Option<MatchResult> {
        let mut best: Option<(usize, u32)> = None;
        for (idx, phrase) in self.vocabulary.phrases().iter().enumerate() {
            let ratio = self.scorer.ratio(text, phrase);
            if best.is_none_or(|(_, top)| ratio > top) {
                best = Some((idx, ratio));
            }
        }

        let (idx, ratio) = best?;
        debug!("Fuzzy stage: best \"{}\" at {}", self.vocabulary.phrases()[idx], ratio);

        if ratio >= self.fuzzy_threshold {
            return Some(MatchResult {
                method: MatchMethod::Fuzzy,
                phrase: self.vocabulary.phrases()[idx].clone(),
                score: f64::from(ratio),
            });
        }
        None
    }
}
