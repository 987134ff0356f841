//! Sign Translator - speech-to-sign-language translation CLI.
//!
//! Wires the translation core together: loads the canonical phrase
//! vocabulary, builds the similarity engine and asset catalog, then
//! translates a transcript (or an audio file via an external STT
//! command) and prints the composite result as JSON.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::LocalTime;

use sign_translator::{
    AppConfig, CommandTranscriber, FsAssetCatalog, HashedNgramEmbedder, RenderSelector,
    SimilarityEngine, TokenSortScorer, TranslationPipeline, Vocabulary,
};

fn main() -> Result<()> {
    // Parse command line arguments
    let config = AppConfig::from_args();

    // Initialize logging with time-only format
    // Respect RUST_LOG env var, fallback to verbose flag, default to info
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| if config.verbose { EnvFilter::try_new("debug") } else { EnvFilter::try_new("info") })
        .unwrap();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(LocalTime::new(time::macros::format_description!("[hour]:[minute]:[second]")))
        .init();

    info!("🤟 Sign Translator v{}", env!("CARGO_PKG_VERSION"));

    // Validate configuration before serving anything
    if let Err(e) = config.validate() {
        error!("❌ Configuration error: {}", e);
        std::process::exit(1);
    }

    // Load the canonical vocabulary (fail fast on integrity problems)
    let vocabulary = Vocabulary::load(&config.phrases).context("failed to load phrase vocabulary")?;
    info!("Loaded {} canonical phrases", vocabulary.len());

    if config.list_phrases {
        for phrase in vocabulary.phrases() {
            println!("{phrase}");
        }
        return Ok(());
    }

    config.log_config();

    // Build the read-only translation core shared by all requests
    let embedder = Box::new(HashedNgramEmbedder::new(config.embedding_dim));
    let engine = SimilarityEngine::new(vocabulary, embedder, Box::new(TokenSortScorer), config.embedding_threshold, config.fuzzy_threshold)?;

    let catalog = FsAssetCatalog::new(config.clips_dir.clone(), config.letters_dir.clone(), &config.clip_ext, &config.letter_ext);
    let pipeline = TranslationPipeline::new(Arc::new(engine), RenderSelector::new(Box::new(catalog)));

    let translation = if let Some(ref text) = config.text {
        pipeline.translate(Some(text))
    } else {
        // validate() guarantees both the audio path and the command
        let audio = config.audio.as_ref().expect("validated audio path");
        let command = config.stt_command.as_deref().expect("validated stt command");
        let transcriber = CommandTranscriber::new(command)?;
        pipeline.translate_audio(&transcriber, audio)
    };

    println!("{}", serde_json::to_string_pretty(&translation)?);
    Ok(())
}
