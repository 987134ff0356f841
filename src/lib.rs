//! Sign Translator - speech-to-sign-language translation core.
//!
//! Converts a spoken-utterance transcript into a sign-language render
//! decision: the closest canonical phrase is found with a two-stage
//! similarity algorithm (semantic embedding, then lexical fuzzy
//! fallback), and the result is rendered as a phrase clip, a
//! letter-by-letter fingerspelling sequence, or "unknown" depending on
//! which visual assets exist.
//!
//! Speech capture, transcription engines, the network layer, and asset
//! playback are external collaborators behind traits; this crate only
//! decides *which* phrase and *which* rendering mode apply.

pub mod config;
pub mod pipeline;
pub mod render;
pub mod stt;
pub mod text;

pub use config::{AppConfig, Vocabulary};
pub use pipeline::{Translation, TranslationPipeline};
pub use render::{AssetCatalog, FsAssetCatalog, RenderDecision, RenderSelector};
pub use stt::{CommandTranscriber, Transcriber};
pub use text::{
    EmbeddingError, EmbeddingProvider, FuzzyScorer, HashedNgramEmbedder, MatchMethod,
    MatchResult, SimilarityEngine, TokenSortScorer, normalize,
};
