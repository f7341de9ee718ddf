//! Emotion detector: polarity + style signals → five-category distribution
//!
//! Branching:
//! - empty text, or near-neutral polarity → absent sentinel
//! - compound >= 0.05 → positive branch (joy with a small leak)
//! - compound <  0.05 → negative branch (shared mass + leftover routing,
//!   priority fear > sadness > anger)

use crate::core::keywords::{has_fear_cue, has_sadness_cue};
use crate::core::polarity::{LexiconAnalyzer, PolarityAnalyzer};
use crate::core::style::StyleExtractor;
use crate::types::{EmotionDistribution, EmotionScores, PolarityReading, StyleSignals};
use crate::{
    JOY_COMPOUND_BASE, JOY_COMPOUND_SCALE, JOY_FLOOR, LEAK_DISGUST_SHARE, NEG_ANGER_SHARE,
    NEG_COMPOUND_SCALE, NEG_FEAR_SHARE, NEG_FLOOR, NEG_JOY_RESIDUAL, NEUTRAL_COMPOUND_GATE,
    NEUTRAL_INTENSITY_GATE, POSITIVE_LEAK,
};
use std::sync::Arc;

/// The emotion detector. Construct once and share; every call is a pure
/// function of the text with no retained state.
pub struct EmotionDetector {
    analyzer: Arc<dyn PolarityAnalyzer>,
    style: StyleExtractor,
}

impl Default for EmotionDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl EmotionDetector {
    /// Create a detector backed by the built-in lexicon analyzer
    pub fn new() -> Self {
        Self::with_analyzer(Arc::new(LexiconAnalyzer::new()))
    }

    /// Create a detector with a custom polarity analyzer
    pub fn with_analyzer(analyzer: Arc<dyn PolarityAnalyzer>) -> Self {
        Self {
            analyzer,
            style: StyleExtractor::new(),
        }
    }

    /// Detect emotion in text.
    ///
    /// Never fails: degenerate inputs (empty, whitespace-only,
    /// near-neutral) yield the absent sentinel, everything else a
    /// distribution summing to 1.
    pub fn detect(&self, text: &str) -> EmotionDistribution {
        let text = text.trim();
        if text.is_empty() {
            return EmotionDistribution::absent();
        }

        let reading = self.analyzer.analyze(text);

        // Near-neutral polarity is treated as undetectable emotion
        if reading.compound > -NEUTRAL_COMPOUND_GATE
            && reading.compound < NEUTRAL_COMPOUND_GATE
            && reading.positive.max(reading.negative) < NEUTRAL_INTENSITY_GATE
        {
            return EmotionDistribution::absent();
        }

        let signals = self.style.extract(text);

        let scores = if reading.compound >= NEUTRAL_COMPOUND_GATE {
            score_positive(&reading, &signals)
        } else {
            score_negative(text, &reading, &signals)
        };

        EmotionDistribution::from_scores(&scores)
    }
}

/// Positive branch: joy dominates, with a small leak into the other
/// categories so the distribution is never all-or-nothing.
fn score_positive(reading: &PolarityReading, signals: &StyleSignals) -> EmotionScores {
    let joy = if reading.positive > 0.0 {
        reading.positive
    } else {
        // Analyzer reported zero positive intensity but compound is
        // positive; keep joy strictly positive
        JOY_FLOOR.max(JOY_COMPOUND_BASE + reading.compound * JOY_COMPOUND_SCALE)
    };

    let mut scores = EmotionScores {
        joy,
        ..EmotionScores::zero()
    };

    let leak = POSITIVE_LEAK * joy;
    scores.anger += leak * signals.anger_signal;
    scores.fear += leak * signals.fear_signal;
    scores.disgust += leak * LEAK_DISGUST_SHARE;
    // Sadness absorbs only the unallocated remainder of the leak budget
    scores.sadness += (leak - (scores.anger + scores.fear + scores.disgust)).max(0.0);

    scores
}

/// Negative branch: distribute the negative mass by style signals, then
/// route the leftover by fixed priority (fear > sadness > anger).
///
/// Keywords never create mass: total raw negative mass before routing
/// equals `base_neg`.
fn score_negative(text: &str, reading: &PolarityReading, signals: &StyleSignals) -> EmotionScores {
    let base_neg = if reading.negative > 0.0 {
        reading.negative
    } else {
        NEG_FLOOR.max(-reading.compound * NEG_COMPOUND_SCALE)
    };

    let mut anger_part = base_neg * NEG_ANGER_SHARE * signals.anger_signal;
    let mut fear_part = base_neg * NEG_FEAR_SHARE * signals.fear_signal;
    let disgust = base_neg * signals.disgust_base;

    let assigned = anger_part + fear_part + disgust;
    let leftover = (base_neg - assigned).max(0.0);

    let mut sadness = 0.0;
    if has_fear_cue(text) {
        fear_part += leftover;
    } else if has_sadness_cue(text) {
        sadness += leftover;
    } else {
        anger_part += leftover; // fallback
    }

    EmotionScores {
        anger: anger_part,
        disgust,
        fear: fear_part,
        joy: (reading.positive * NEG_JOY_RESIDUAL).max(0.0),
        sadness,
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Emotion;

    /// Fixed-reading analyzer for driving branches directly
    struct FixedAnalyzer(PolarityReading);

    impl PolarityAnalyzer for FixedAnalyzer {
        fn analyze(&self, _text: &str) -> PolarityReading {
            self.0
        }
    }

    fn fixed(positive: f64, negative: f64, compound: f64) -> EmotionDetector {
        EmotionDetector::with_analyzer(Arc::new(FixedAnalyzer(PolarityReading {
            positive,
            negative,
            compound,
        })))
    }

    fn sum(dist: &EmotionDistribution) -> f64 {
        dist.iter().filter_map(|(_, v)| v).sum()
    }

    #[test]
    fn test_empty_text_is_absent() {
        let detector = EmotionDetector::new();
        assert!(detector.detect("").is_absent());
        assert!(detector.detect("   \t\n  ").is_absent());
    }

    #[test]
    fn test_empty_text_skips_analyzer() {
        struct PanicAnalyzer;
        impl PolarityAnalyzer for PanicAnalyzer {
            fn analyze(&self, _text: &str) -> PolarityReading {
                panic!("analyzer must not be called for empty input");
            }
        }
        let detector = EmotionDetector::with_analyzer(Arc::new(PanicAnalyzer));
        assert!(detector.detect("  ").is_absent());
    }

    #[test]
    fn test_neutral_gate() {
        // compound inside the gate and both intensities weak
        let detector = fixed(0.03, 0.02, 0.01);
        assert!(detector.detect("some neutral words").is_absent());
    }

    #[test]
    fn test_weak_compound_strong_intensity_escapes_gate() {
        // compound near zero but intensities are not weak
        let detector = fixed(0.0, 0.3, 0.01);
        let dist = detector.detect("some words");
        assert!(!dist.is_absent());
        assert!((sum(&dist) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_positive_branch_joy_dominates() {
        let detector = fixed(0.6, 0.0, 0.7);
        let dist = detector.detect("plain words here");
        assert_eq!(dist.dominant_emotion, Some(Emotion::Joy));
        assert!((sum(&dist) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_positive_branch_zero_pos_still_gets_joy() {
        // Provider reports zero positive intensity but positive compound
        let detector = fixed(0.0, 0.0, 0.3);
        let dist = detector.detect("words");
        let joy = dist.joy.unwrap();
        assert!(joy > 0.0, "Joy must stay strictly positive, got {}", joy);
        assert_eq!(dist.dominant_emotion, Some(Emotion::Joy));
    }

    #[test]
    fn test_positive_leak_never_makes_sadness_negative() {
        let detector = fixed(0.5, 0.0, 0.8);
        let dist = detector.detect("plain words");
        assert!(dist.sadness.unwrap() >= 0.0);
    }

    #[test]
    fn test_negative_branch_fear_keyword_takes_leftover() {
        let detector = fixed(0.0, 0.5, -0.6);
        // Both cues present: fear wins by priority
        let dist = detector.detect("I am scared and sad");
        assert!(
            dist.fear.unwrap() > dist.sadness.unwrap(),
            "Fear must receive leftover over sadness: fear={:?} sadness={:?}",
            dist.fear,
            dist.sadness
        );
    }

    #[test]
    fn test_negative_branch_sadness_keyword_takes_leftover() {
        let detector = fixed(0.0, 0.5, -0.6);
        let dist = detector.detect("I feel miserable and lonely");
        assert!(dist.sadness.unwrap() > 0.0, "Sadness cue should route leftover");
        assert_eq!(dist.dominant_emotion, Some(Emotion::Sadness));
    }

    #[test]
    fn test_negative_branch_fallback_routes_to_anger() {
        let detector = fixed(0.0, 0.5, -0.6);
        // No fear or sadness cue
        let dist = detector.detect("THIS IS UNACCEPTABLE!!!");
        assert_eq!(dist.dominant_emotion, Some(Emotion::Anger));
    }

    #[test]
    fn test_negative_branch_zero_neg_uses_compound_fallback() {
        let detector = fixed(0.0, 0.0, -0.5);
        let dist = detector.detect("plain words");
        assert!(!dist.is_absent());
        assert!((sum(&dist) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_negative_branch_keeps_residual_joy() {
        // Mixed text: some positive intensity despite negative compound
        let detector = fixed(0.2, 0.5, -0.4);
        let dist = detector.detect("plain words");
        assert!(dist.joy.unwrap() > 0.0, "Mixed text keeps a joy residual");
    }

    #[test]
    fn test_mass_conserved_before_routing() {
        // With no joy residual, raw negative mass equals base_neg, so the
        // normalized values are exactly the branch shares
        let reading = PolarityReading {
            positive: 0.0,
            negative: 0.4,
            compound: -0.5,
        };
        let signals = StyleExtractor::new().extract("calm words");
        let scores = score_negative("calm words", &reading, &signals);
        assert!(
            (scores.total() - 0.4).abs() < 1e-9,
            "Raw negative mass must equal base_neg, got {}",
            scores.total()
        );
    }

    #[test]
    fn test_determinism() {
        let detector = EmotionDetector::new();
        let a = detector.detect("I am very happy today!");
        let b = detector.detect("I am very happy today!");
        assert_eq!(a, b);
        assert_eq!(
            a.joy.unwrap().to_bits(),
            b.joy.unwrap().to_bits(),
            "Results must be bit-identical"
        );
    }
}
