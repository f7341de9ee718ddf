//! Style signal extractor: punctuation, casing, and elongation cues
//!
//! No lexicon here - the signals are pure surface features, independent
//! of word meaning.

use crate::types::{StyleFeatures, StyleSignals};
use crate::{
    CAPS_TOKEN_FRACTION, DISGUST_BASE, STYLE_ANGER_BIAS, STYLE_ANGER_CAPS, STYLE_ANGER_ELONG,
    STYLE_ANGER_EXCLAIM, STYLE_FEAR_BIAS, STYLE_FEAR_CAPS, STYLE_FEAR_QUESTION,
};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Maximal runs of ASCII letters
    static ref RE_ALPHA_TOKEN: Regex = Regex::new(r"[A-Za-z]+").unwrap();
}

/// Extracts style signals from raw text
#[derive(Debug, Default)]
pub struct StyleExtractor;

impl StyleExtractor {
    /// Create new extractor
    pub fn new() -> Self {
        Self
    }

    /// Extract style signals from text.
    ///
    /// Pure function of the text; case- and punctuation-sensitive, never
    /// word-sensitive.
    pub fn extract(&self, text: &str) -> StyleSignals {
        let exclamations = text.chars().filter(|&c| c == '!').count();
        let questions = text.chars().filter(|&c| c == '?').count();

        // ALL-CAPS token ratio over alphabetic tokens
        let tokens: Vec<&str> = RE_ALPHA_TOKEN.find_iter(text).map(|m| m.as_str()).collect();
        let caps_tokens = tokens
            .iter()
            .filter(|t| t.len() >= 2 && is_caps_token(t))
            .count();
        let caps_ratio = if tokens.is_empty() {
            0.0
        } else {
            caps_tokens as f64 / tokens.len() as f64
        };

        let elongation = has_elongation(text);

        let elong_term = if elongation { STYLE_ANGER_ELONG } else { 0.0 };
        let anger_signal = sigmoid(
            STYLE_ANGER_EXCLAIM * exclamations as f64
                + STYLE_ANGER_CAPS * caps_ratio
                + elong_term
                + STYLE_ANGER_BIAS,
        );
        let fear_signal = sigmoid(
            STYLE_FEAR_QUESTION * questions as f64 + STYLE_FEAR_CAPS * caps_ratio + STYLE_FEAR_BIAS,
        );

        StyleSignals {
            anger_signal,
            fear_signal,
            disgust_base: DISGUST_BASE,
            features: StyleFeatures {
                exclamations,
                questions,
                caps_ratio,
                elongation,
            },
        }
    }
}

/// Standard logistic function
fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Token counts as ALL-CAPS when >= 80% of its characters are uppercase
fn is_caps_token(token: &str) -> bool {
    let upper = token.chars().filter(|c| c.is_uppercase()).count();
    upper as f64 / token.len() as f64 >= CAPS_TOKEN_FRACTION
}

/// Any character immediately repeated 3+ times in a row.
///
/// Equivalent to the backreference pattern `(.)\1{2,}`, which the regex
/// crate cannot express, so this is a linear scan.
fn has_elongation(text: &str) -> bool {
    let mut run = 1usize;
    let mut prev: Option<char> = None;
    for c in text.chars() {
        if Some(c) == prev {
            run += 1;
            if run >= 3 {
                return true;
            }
        } else {
            run = 1;
            prev = Some(c);
        }
    }
    false
}

// =============================================================================
// TESTS
// =============================================================================
