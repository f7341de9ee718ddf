//! Keyword matchers for leftover routing
//!
//! Two compact whole-word lexicons (fear, sadness). They never create
//! score mass on their own: the scorer consults them only to decide where
//! already-computed leftover negative mass goes.

use lazy_static::lazy_static;
use regex::Regex;

/// Fear cue words, matched case-insensitively as whole words
pub const FEAR_WORDS: &[&str] = &[
    "worry",
    "worried",
    "afraid",
    "scared",
    "fear",
    "fearful",
    "anxious",
    "anxiety",
    "nervous",
    "panic",
    "panicking",
    "tense",
    "tensed",
    "stress",
    "stressed",
    "overwhelm",
    "overwhelmed",
];

/// Sadness cue words; "burnt out"/"burned out" are handled separately
/// with flexible whitespace
pub const SADNESS_WORDS: &[&str] = &[
    "sad",
    "down",
    "unhappy",
    "depress",
    "depressed",
    "miserable",
    "heartbroken",
    "lonely",
    "gloomy",
    "blue",
    "tired",
    "exhausted",
];

lazy_static! {
    static ref RE_FEAR: Regex = build_word_regex(FEAR_WORDS, &[]);
    static ref RE_SADNESS: Regex = build_word_regex(SADNESS_WORDS, &[r"burnt\s*out", r"burned\s*out"]);
}

/// Build a case-insensitive whole-word alternation from a word list plus
/// optional extra raw patterns
fn build_word_regex(words: &[&str], extra: &[&str]) -> Regex {
    let mut alternatives: Vec<String> = words.iter().map(|w| regex::escape(w)).collect();
    alternatives.extend(extra.iter().map(|p| (*p).to_string()));
    let pattern = format!(r"(?i)\b(?:{})\b", alternatives.join("|"));
    Regex::new(&pattern).expect("keyword pattern is valid")
}

/// Does the text contain a fear cue word?
pub fn has_fear_cue(text: &str) -> bool {
    RE_FEAR.is_match(text)
}

/// Does the text contain a sadness cue word?
pub fn has_sadness_cue(text: &str) -> bool {
    RE_SADNESS.is_match(text)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fear_words_match_whole_words() {
        assert!(has_fear_cue("I am so worried about this"));
        assert!(has_fear_cue("Panic everywhere"));
        assert!(!has_fear_cue("the fearless knight")); // "fear" only as prefix
        assert!(!has_fear_cue("nothing to see here"));
    }

    #[test]
    fn test_fear_case_insensitive() {
        assert!(has_fear_cue("I AM SCARED"));
        assert!(has_fear_cue("Anxious?"));
    }

    #[test]
    fn test_sadness_words() {
        assert!(has_sadness_cue("feeling sad today"));
        assert!(has_sadness_cue("I am depressed"));
        assert!(has_sadness_cue("so tired of everything"));
        assert!(!has_sadness_cue("a great day"));
    }

    #[test]
    fn test_burnt_out_whitespace_flexible() {
        assert!(has_sadness_cue("completely burnt out"));
        assert!(has_sadness_cue("burned  out after the release"));
        assert!(has_sadness_cue("feeling burntout lately"));
    }

    #[test]
    fn test_matchers_are_independent() {
        let text = "I am scared and sad";
        assert!(has_fear_cue(text));
        assert!(has_sadness_cue(text));
    }
}
