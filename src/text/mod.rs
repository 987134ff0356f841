//! Text processing: normalization and two-stage phrase matching.
//!
//! Provides transcript canonicalization, the embedding and fuzzy
//! similarity providers, and the `SimilarityEngine` that chains them.

mod embedding;
mod fuzzy;
mod matcher;
mod normalizer;

pub use embedding::{EmbeddingError, EmbeddingProvider, HashedNgramEmbedder, PhraseIndex};
pub use fuzzy::{FuzzyScorer, TokenSortScorer};
pub use matcher::{MatchMethod, MatchResult, SimilarityEngine};
pub use normalizer::normalize;
