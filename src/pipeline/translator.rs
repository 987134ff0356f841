//! Orchestrates the translation stages and assembles the composite
//! result handed to the surrounding API/UI layer.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::render::{RenderDecision, RenderSelector};
use crate::stt::Transcriber;
use crate::text::{MatchResult, SimilarityEngine, normalize};

/// Composite translation output.
///
/// `input_text` preserves the raw transcript verbatim; matching and
/// render selection operate on the normalized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Translation {
    pub input_text: String,
    #[serde(rename = "match")]
    pub matched: MatchResult,
    pub render: RenderDecision,
}

impl Translation {
    /// The output for an absent or empty transcript.
    fn empty() -> Self {
        Self { input_text: String::new(), matched: MatchResult::none(), render: RenderDecision::Unknown }
    }
}

/// Runs Normalizer -> SimilarityEngine -> RenderSelector for each
/// request. Stateless per request: the engine and selector are shared,
/// read-only collaborators, so the pipeline is safe to call from
/// concurrent requests.
pub struct TranslationPipeline {
    engine: Arc<SimilarityEngine>,
    selector: RenderSelector,
}

impl TranslationPipeline {
    pub fn new(engine: Arc<SimilarityEngine>, selector: RenderSelector) -> Self {
        Self { engine, selector }
    }

    /// Translate a transcript into a match and render decision.
    ///
    /// An absent or empty transcript (upstream transcription failure)
    /// short-circuits to the empty translation without invoking the
    /// matcher or selector.
    pub fn translate(&self, transcript: Option<&str>) -> Translation {
        let raw = transcript.unwrap_or("");
        if raw.is_empty() {
            debug!("Empty transcript, short-circuiting");
            return Translation::empty();
        }

        let normalized = normalize(raw);
        let matched = self.engine.best_match(&normalized);
        let render = self.selector.select(&matched, &normalized);

        info!("🔎 \"{}\" -> {:?} \"{}\" ({})", normalized, matched.method, matched.phrase, matched.score);

        Translation { input_text: raw.to_string(), matched, render }
    }

    /// Transcribe an audio file with the given collaborator and
    /// translate the result. No transcript is a normal outcome that
    /// flows into the empty translation.
    pub fn translate_audio(&self, transcriber: &dyn Transcriber, audio: &Path) -> Translation {
        let transcript = transcriber.transcribe(audio);
        self.translate(transcript.as_deref())
    }
}
