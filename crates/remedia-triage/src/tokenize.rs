//! Input normalization and tokenization.
//!
//! The matcher scores lowercase text. Tokens are maximal alphanumeric runs;
//! anything shorter than `MIN_TOKEN_CHARS` is discarded so that filler
//! words ("a", "is", "my") never contribute to a score.

/// Minimum token length kept by the tokenizer. Tokens of length 2 or less
/// are discarded.
pub const MIN_TOKEN_CHARS: usize = 3;

/// Lowercase the raw input. All matching happens on the result.
pub fn normalize(input: &str) -> String {
    input.to_lowercase()
}

/// Split normalized text on whitespace and punctuation, keeping only
/// tokens of at least `MIN_TOKEN_CHARS` characters.
pub fn tokenize(normalized: &str) -> Vec<&str> {
    normalized
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS)
        .collect()
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::{normalize, tokenize};

    #[test]
    fn tokenize_splits_on_punctuation_and_whitespace() {
        let normalized = normalize("Runny nose, sore-throat; cough!");
        let tokens = tokenize(&normalized);
        assert_eq!(tokens, vec!["runny", "nose", "sore", "throat", "cough"]);
    }

    #[test]
    fn tokenize_discards_short_tokens() {
        let normalized = normalize("I am ok but my leg hurts");
        let tokens = tokenize(&normalized);
        // "I", "am", "ok", "my" are all too short to keep.
        assert_eq!(tokens, vec!["but", "leg", "hurts"]);
    }

    #[test]
    fn tokenize_empty_input_yields_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  ,.;  ").is_empty());
    }

    #[test]
    fn normalize_lowercases() {
        assert_eq!(normalize("Sore THROAT"), "sore throat");
    }
}
