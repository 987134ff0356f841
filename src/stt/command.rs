//! Transcription backend driving an external STT command.

use std::path::Path;
use std::process::Command;

use anyhow::Result;
use tracing::{debug, warn};

use super::Transcriber;

/// Runs a configured external speech-to-text command with the audio
/// file path appended as the final argument and reads the transcript
/// from stdout.
///
/// The command string is validated at startup; a missing binary,
/// non-zero exit, or empty output at request time all surface as
/// `None`, never as an error.
pub struct CommandTranscriber {
    program: String,
    args: Vec<String>,
}

impl CommandTranscriber {
    /// Split a command line into program and arguments.
    ///
    /// # Errors
    /// Returns an error if the command string is empty; backend
    /// selection problems are configuration errors caught before any
    /// request is served.
    pub fn new(command: &str) -> Result<Self> {
        let mut parts = command.split_whitespace();
        let program = parts.next().ok_or_else(|| anyhow::anyhow!("transcription command is empty"))?.to_string();
        let args = parts.map(String::from).collect();
        Ok(Self { program, args })
    }
}

impl Transcriber for CommandTranscriber {
    fn transcribe(&self, audio: &Path) -> Option<String> {
        debug!("Transcribing {} via '{}'", audio.display(), self.program);

        let output = match Command::new(&self.program).args(&self.args).arg(audio).output() {
            Ok(output) => output,
            Err(e) => {
                warn!("Transcription command '{}' failed to start: {}", self.program, e);
                return None;
            }
        };

        if !output.status.success() {
            warn!("Transcription command '{}' exited with {}", self.program, output.status);
            return None;
        }

        let text = String::from_utf8_lossy(&output.stdout).trim().to_lowercase();
        if text.is_empty() {
            debug!("Transcription produced no text");
            return None;
        }
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_command_is_rejected() {
        assert!(CommandTranscriber::new("").is_err());
        assert!(CommandTranscriber::new("   ").is_err());
    }

    #[test]
    fn test_command_line_is_split() {
        let transcriber = CommandTranscriber::new("whisper-cli --model small --output-txt").unwrap();
        assert_eq!(transcriber.program, "whisper-cli");
        assert_eq!(transcriber.args, vec!["--model", "small", "--output-txt"]);
    }

    #[test]
    fn test_missing_binary_yields_none() {
        let transcriber = CommandTranscriber::new("/nonexistent/stt-engine").unwrap();
        assert_eq!(transcriber.transcribe(Path::new("audio.wav")), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_stdout_is_trimmed_and_lowercased() {
        let transcriber = CommandTranscriber::new("echo Hello World").unwrap();
        // `echo Hello World audio.wav` -> transcript includes the path,
        // which is fine for exercising the trim/lowercase path.
        assert_eq!(transcriber.transcribe(Path::new("x")).as_deref(), Some("hello world x"));
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_command_yields_none() {
        let transcriber = CommandTranscriber::new("false").unwrap();
        assert_eq!(transcriber.transcribe(Path::new("audio.wav")), None);
    }
}
