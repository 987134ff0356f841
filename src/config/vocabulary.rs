//! Canonical phrase vocabulary.
//!
//! The vocabulary is loaded once at startup and read-only afterwards.
//! Order is significant: both matching stages break score ties by
//! taking the first phrase in vocabulary order.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Startup integrity failures while loading the phrase vocabulary.
#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("failed to read phrase file {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },

    #[error("malformed phrase file {path}: {source}")]
    Malformed { path: PathBuf, source: serde_json::Error },

    #[error("phrase file {path} contains no phrases")]
    Empty { path: PathBuf },
}

/// On-disk shape: `{"phrases": ["hello", "thank you", ...]}`.
#[derive(Debug, Deserialize)]
struct PhraseFile {
    phrases: Vec<String>,
}

/// The fixed, ordered list of canonical sign-language phrases.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    phrases: Vec<String>,
}

impl Vocabulary {
    /// Load the vocabulary from its JSON file, failing fast on a
    /// missing, malformed, or empty file.
    pub fn load(path: &Path) -> Result<Self, VocabularyError> {
        let raw = fs::read_to_string(path).map_err(|source| VocabularyError::Io { path: path.to_path_buf(), source })?;

        let file: PhraseFile =
            serde_json::from_str(&raw).map_err(|source| VocabularyError::Malformed { path: path.to_path_buf(), source })?;

        if file.phrases.is_empty() {
            return Err(VocabularyError::Empty { path: path.to_path_buf() });
        }

        Ok(Self { phrases: file.phrases })
    }

    /// Build a vocabulary directly from an ordered phrase list.
    pub fn from_phrases(phrases: Vec<String>) -> Self {
        Self { phrases }
    }

    /// Phrases in canonical order.
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}
