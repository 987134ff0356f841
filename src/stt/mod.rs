//! Speech-to-text collaborator contract.
//!
//! Transcription engines live outside this core. The pipeline only
//! sees the `Transcriber` trait: lowercase text or nothing, with every
//! engine failure surfacing as absence rather than an error.

mod command;

use std::path::Path;

pub use command::CommandTranscriber;

/// Speech-to-text implementations.
pub trait Transcriber: Send + Sync {
    /// Transcribe an audio file to lowercase text.
    ///
    /// Returns `None` when nothing was recognized or the engine
    /// failed; failures never cross into the pipeline.
    fn transcribe(&self, audio: &Path) -> Option<String>;
}
