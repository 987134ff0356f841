//! Transcript canonicalization before phrase matching.

/// Canonicalize raw text for comparison: strip punctuation, collapse
/// whitespace runs to single spaces, trim, and lowercase.
///
/// Idempotent, and never fails: `normalize("") == ""`.
pub fn normalize(text: &str) -> String {
    let stripped: String = text.chars().filter(|c| !c.is_ascii_punctuation()).collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_punctuation_and_lowercases() {
        assert_eq!(normalize("Hello, World!"), "hello world");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(normalize("  thank \t you\n very   much "), "thank you very much");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("!?!..."), "");
    }

    #[test]
    fn test_idempotent() {
        for input in ["Hello, World!", "  a  b  ", "", "ALREADY normal"] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }
}
