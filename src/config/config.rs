//! Application configuration and CLI argument parsing.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};

/// Sign translator application configuration.
#[derive(Parser, Debug, Clone)]
#[command(name = "sign-translator")]
#[command(author, version, about = "Translate spoken utterances into sign-language renderings", long_about = None)]
pub struct AppConfig {
    /// Transcript text to translate (skips speech-to-text)
    #[arg(long, short = 't')]
    pub text: Option<String>,

    /// Audio file to transcribe and translate
    #[arg(long, short = 'a')]
    pub audio: Option<PathBuf>,

    /// List the canonical phrase vocabulary and exit
    #[arg(long)]
    pub list_phrases: bool,

    /// Path to the canonical phrase file ({"phrases": [...]})
    #[arg(long, env = "SIGN_PHRASES", default_value_os_t = default_data_dir().join("phrases.json"))]
    pub phrases: PathBuf,

    /// Directory containing per-phrase sign clips
    #[arg(long, env = "SIGN_CLIPS_DIR", default_value_os_t = default_data_dir().join("assets").join("clips"))]
    pub clips_dir: PathBuf,

    /// Directory containing per-letter fingerspelling images
    #[arg(long, env = "SIGN_LETTERS_DIR", default_value_os_t = default_data_dir().join("assets").join("letters"))]
    pub letters_dir: PathBuf,

    /// File extension of phrase clips
    #[arg(long, default_value = "gif")]
    pub clip_ext: String,

    /// File extension of letter images
    #[arg(long, default_value = "jpg")]
    pub letter_ext: String,

    /// Minimum cosine similarity for an embedding-stage match (0.0-1.0)
    #[arg(long, default_value = "0.65", value_parser = parse_unit_interval)]
    pub embedding_threshold: f32,

    /// Minimum token-sort ratio for a fuzzy-stage match (0-100)
    #[arg(long, default_value = "80", value_parser = parse_ratio)]
    pub fuzzy_threshold: u32,

    /// Dimension of the hashed n-gram embedding vectors
    #[arg(long, default_value = "256")]
    pub embedding_dim: usize,

    /// External speech-to-text command; the audio path is appended as
    /// the final argument and the transcript is read from stdout
    #[arg(long, env = "SIGN_STT_COMMAND")]
    pub stt_command: Option<String>,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl AppConfig {
    /// Parse configuration from command line arguments.
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Validate the configuration before serving any translation.
    pub fn validate(&self) -> Result<()> {
        if !self.list_phrases && self.text.is_none() && self.audio.is_none() {
            anyhow::bail!("nothing to do: pass --text, --audio, or --list-phrases");
        }

        if self.text.is_some() && self.audio.is_some() {
            anyhow::bail!("--text and --audio are mutually exclusive");
        }

        if !self.phrases.is_file() {
            anyhow::bail!("phrase file not found: {}", self.phrases.display());
        }

        if let Some(ref audio) = self.audio {
            if !audio.is_file() {
                anyhow::bail!("audio file not found: {}", audio.display());
            }
            if self.stt_command.as_deref().is_none_or(|c| c.trim().is_empty()) {
                anyhow::bail!("--audio requires a speech-to-text backend; set --stt-command");
            }
        }

        // Missing asset directories only narrow render decisions, so
        // they are worth a warning but not a startup failure.
        if !self.clips_dir.is_dir() {
            warn!("Clips directory not found: {}", self.clips_dir.display());
        }
        if !self.letters_dir.is_dir() {
            warn!("Letters directory not found: {}", self.letters_dir.display());
        }

        Ok(())
    }

    /// Log the current configuration.
    pub fn log_config(&self) {
        info!("Configuration:");
        info!("  Phrase file: {}", self.phrases.display());
        info!("  Clips directory: {} (*.{})", self.clips_dir.display(), self.clip_ext);
        info!("  Letters directory: {} (*.{})", self.letters_dir.display(), self.letter_ext);
        info!("  Embedding threshold: {}", self.embedding_threshold);
        info!("  Fuzzy threshold: {}", self.fuzzy_threshold);
        info!("  Embedding dimension: {}", self.embedding_dim);
        if let Some(ref command) = self.stt_command {
            info!("  STT command: {}", command);
        }
    }
}

/// Get the default data directory (~/.sign-translator).
fn default_data_dir() -> PathBuf {
    if let Some(home_dir) = dirs::home_dir() {
        home_dir.join(".sign-translator")
    } else {
        PathBuf::from(".sign-translator")
    }
}

/// Parse and validate a similarity threshold in 0.0-1.0.
fn parse_unit_interval(s: &str) -> Result<f32, String> {
    let value: f32 = s.parse().map_err(|_| format!("'{}' is not a valid float", s))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("threshold must be between 0.0 and 1.0, got {}", value))
    }
}

/// Parse and validate a fuzzy ratio threshold in 0-100.
fn parse_ratio(s: &str) -> Result<u32, String> {
    let value: u32 = s.parse().map_err(|_| format!("'{}' is not a valid integer", s))?;
    if value <= 100 {
        Ok(value)
    } else {
        Err(format!("ratio threshold must be between 0 and 100, got {}", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_parsers() {
        assert_eq!(parse_unit_interval("0.65"), Ok(0.65));
        assert!(parse_unit_interval("1.5").is_err());
        assert!(parse_unit_interval("abc").is_err());

        assert_eq!(parse_ratio("80"), Ok(80));
        assert!(parse_ratio("101").is_err());
        assert!(parse_ratio("-1").is_err());
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::parse_from(["sign-translator", "--text", "hello"]);
        assert_eq!(config.embedding_threshold, 0.65);
        assert_eq!(config.fuzzy_threshold, 80);
        assert_eq!(config.clip_ext, "gif");
        assert_eq!(config.letter_ext, "jpg");
    }

    #[test]
    fn test_validate_requires_an_input_mode() {
        let mut config = AppConfig::parse_from(["sign-translator"]);
        assert!(config.validate().is_err());

        config.list_phrases = true;
        config.phrases = PathBuf::from("/nonexistent/phrases.json");
        // Still fails: the phrase file must exist.
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_audio_requires_stt_command() {
        use std::io::Write;
        let mut phrase_file = tempfile::NamedTempFile::new().unwrap();
        phrase_file.write_all(br#"{"phrases": ["hello"]}"#).unwrap();
        let audio_file = tempfile::NamedTempFile::new().unwrap();

        let mut config = AppConfig::parse_from([
            "sign-translator",
            "--audio",
            audio_file.path().to_str().unwrap(),
        ]);
        config.phrases = phrase_file.path().to_path_buf();
        assert!(config.validate().is_err());

        config.stt_command = Some("whisper-cli".to_string());
        assert!(config.validate().is_ok());
    }
}
