//! Configuration module: CLI argument parsing and the canonical
//! phrase vocabulary.

#[allow(clippy::module_inception)]
mod config;
mod vocabulary;

pub use config::AppConfig;
pub use vocabulary::{Vocabulary, VocabularyError};
