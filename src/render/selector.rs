//! Render-mode selection rules.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::text::MatchResult;

use super::assets::AssetCatalog;

/// How the translation should be rendered.
///
/// The payload is the phrase name for a clip, the normalized text for
/// fingerspelled letters, and absent for unknown. The surrounding
/// layer turns payloads into concrete asset locators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "lowercase")]
pub enum RenderDecision {
    Clip(String),
    Letters(String),
    Unknown,
}

impl RenderDecision {
    pub fn payload(&self) -> Option<&str> {
        match self {
            RenderDecision::Clip(phrase) => Some(phrase),
            RenderDecision::Letters(text) => Some(text),
            RenderDecision::Unknown => None,
        }
    }
}

/// Maps a match outcome plus the normalized text to a render decision,
/// consulting the asset catalog. Missing assets are normal outcomes
/// routed to a narrower decision, never errors.
pub struct RenderSelector {
    catalog: Box<dyn AssetCatalog>,
}

impl RenderSelector {
    pub fn new(catalog: Box<dyn AssetCatalog>) -> Self {
        Self { catalog }
    }

    /// Pick the render mode for a match outcome.
    ///
    /// A matched phrase with an existing clip wins. Otherwise the
    /// fingerspelling fallback applies when every alphabetic character
    /// of the normalized text has a letter asset and at least one
    /// alphabetic character exists; the check is all-or-nothing, so a
    /// single missing letter voids the fallback entirely. The fallback
    /// is evaluated even when the match itself came up empty.
    pub fn select(&self, matched: &MatchResult, normalized: &str) -> RenderDecision {
        if !matched.phrase.is_empty() && self.catalog.has_clip(&matched.phrase) {
            return RenderDecision::Clip(matched.phrase.clone());
        }

        let mut saw_alphabetic = false;
        for ch in normalized.chars().filter(|c| c.is_alphabetic()) {
            saw_alphabetic = true;
            if !self.catalog.has_letter(ch) {
                debug!("No letter asset for '{}', voiding fingerspelling fallback", ch);
                return RenderDecision::Unknown;
            }
        }

        if saw_alphabetic {
            RenderDecision::Letters(normalized.to_string())
        } else {
            RenderDecision::Unknown
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::text::{MatchMethod, MatchResult};

    use super::*;

    /// Catalog backed by in-memory sets.
    struct SetCatalog {
        clips: HashSet<&'static str>,
        letters: HashSet<char>,
    }

    impl AssetCatalog for SetCatalog {
        fn has_clip(&self, phrase: &str) -> bool {
            self.clips.contains(phrase)
        }

        fn has_letter(&self, letter: char) -> bool {
            self.letters.contains(&letter)
        }
    }

    fn selector(clips: &[&'static str], letters: &[char]) -> RenderSelector {
        RenderSelector::new(Box::new(SetCatalog {
            clips: clips.iter().copied().collect(),
            letters: letters.iter().copied().collect(),
        }))
    }

    fn matched(phrase: &str) -> MatchResult {
        MatchResult { method: MatchMethod::Fuzzy, phrase: phrase.to_string(), score: 90.0 }
    }

    #[test]
    fn test_matched_phrase_with_clip() {
        let selector = selector(&["hello"], &[]);
        assert_eq!(selector.select(&matched("hello"), "hello"), RenderDecision::Clip("hello".to_string()));
    }

    #[test]
    fn test_missing_clip_falls_back_to_letters() {
        let selector = selector(&[], &['h', 'i']);
        assert_eq!(selector.select(&matched("hello"), "hi"), RenderDecision::Letters("hi".to_string()));
    }

    #[test]
    fn test_none_match_can_still_fingerspell() {
        let selector = selector(&[], &['h', 'i']);
        assert_eq!(selector.select(&MatchResult::none(), "hi"), RenderDecision::Letters("hi".to_string()));
    }

    #[test]
    fn test_digits_are_skipped_in_letter_check() {
        // Only 'h' needs an asset; the digit is passed through in the
        // payload untouched.
        let selector = selector(&[], &['h']);
        assert_eq!(selector.select(&MatchResult::none(), "h1"), RenderDecision::Letters("h1".to_string()));
    }

    #[test]
    fn test_single_missing_letter_voids_fallback() {
        let selector = selector(&[], &['h']);
        assert_eq!(selector.select(&MatchResult::none(), "hx"), RenderDecision::Unknown);
    }

    #[test]
    fn test_no_alphabetic_characters_is_unknown() {
        let selector = selector(&[], &['h']);
        assert_eq!(selector.select(&MatchResult::none(), "123"), RenderDecision::Unknown);
        assert_eq!(selector.select(&MatchResult::none(), ""), RenderDecision::Unknown);
    }

    #[test]
    fn test_payload_accessor() {
        assert_eq!(RenderDecision::Clip("hello".to_string()).payload(), Some("hello"));
        assert_eq!(RenderDecision::Letters("hi".to_string()).payload(), Some("hi"));
        assert_eq!(RenderDecision::Unknown.payload(), None);
    }
}
