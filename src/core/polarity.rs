//! Lexicon-based polarity analyzer
//!
//! A compact, fully offline valence lexicon with booster, negation, and
//! exclamation handling. Any analyzer honoring the [`PolarityReading`]
//! bounds is interchangeable; this one exists so the crate needs no
//! network and no model files.

use crate::types::PolarityReading;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

/// The polarity seam: text in, bounded reading out.
///
/// Implementations must be pure functions of the text (deterministic,
/// no I/O) and safe to share across threads.
pub trait PolarityAnalyzer: Send + Sync {
    /// Analyze text, returning positive/negative intensities in [0, 1]
    /// and a compound valence in [-1, 1]
    fn analyze(&self, text: &str) -> PolarityReading;
}

/// Word valences, roughly on the VADER -4..+4 scale.
///
/// Compact by design: enough coverage for short chat-style utterances,
/// including every word the demo sentences rely on.
const LEXICON: &[(&str, f64)] = &[
    // Positive
    ("adore", 2.6),
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("beautiful", 2.9),
    ("best", 3.2),
    ("brilliant", 2.8),
    ("calm", 1.3),
    ("cheerful", 2.5),
    ("comfortable", 1.7),
    ("cool", 1.3),
    ("delighted", 2.9),
    ("delightful", 2.8),
    ("enjoy", 2.2),
    ("enjoyed", 2.2),
    ("excellent", 2.7),
    ("excited", 2.2),
    ("fantastic", 2.6),
    ("fine", 0.8),
    ("fun", 2.3),
    ("glad", 2.0),
    ("good", 1.9),
    ("grateful", 2.3),
    ("great", 3.1),
    ("happy", 2.7),
    ("hopeful", 1.8),
    ("incredible", 2.6),
    ("joy", 2.8),
    ("joyful", 2.9),
    ("kind", 1.8),
    ("laugh", 2.1),
    ("like", 1.5),
    ("love", 3.2),
    ("loved", 2.9),
    ("lovely", 2.8),
    ("nice", 1.8),
    ("optimistic", 1.9),
    ("perfect", 2.7),
    ("pleasant", 2.3),
    ("pleased", 2.1),
    ("proud", 2.2),
    ("relaxed", 1.8),
    ("relieved", 1.9),
    ("satisfied", 1.9),
    ("smile", 2.0),
    ("thankful", 2.1),
    ("thanks", 1.9),
    ("thrilled", 2.9),
    ("wonderful", 2.7),
    // Negative
    ("afraid", -2.2),
    ("angry", -2.3),
    ("annoyed", -1.8),
    ("anxiety", -1.9),
    ("anxious", -1.9),
    ("appalled", -2.4),
    ("awful", -2.5),
    ("bad", -2.5),
    ("betrayed", -2.4),
    ("bored", -1.3),
    ("broken", -1.6),
    ("cried", -2.1),
    ("cry", -2.1),
    ("danger", -2.4),
    ("dangerous", -2.3),
    ("depressed", -2.8),
    ("depressing", -2.4),
    ("devastated", -3.0),
    ("disappointed", -2.1),
    ("disgust", -2.4),
    ("disgusted", -2.5),
    ("disgusting", -2.6),
    ("dread", -2.3),
    ("dreadful", -2.6),
    ("enraged", -2.9),
    ("exhausted", -1.8),
    ("fear", -2.2),
    ("fearful", -2.3),
    ("frightened", -2.4),
    ("frustrated", -2.2),
    ("furious", -2.7),
    ("gloomy", -1.9),
    ("grief", -2.6),
    ("gross", -2.0),
    ("hate", -2.7),
    ("hated", -2.6),
    ("heartbroken", -2.9),
    ("hopeless", -2.5),
    ("horrible", -2.5),
    ("hurt", -2.1),
    ("infuriated", -2.8),
    ("irritated", -1.9),
    ("lonely", -2.0),
    ("lost", -1.3),
    ("mad", -2.2),
    ("miserable", -2.7),
    ("nasty", -2.3),
    ("nervous", -1.7),
    ("outraged", -2.7),
    ("overwhelmed", -1.6),
    ("panic", -2.3),
    ("panicking", -2.4),
    ("poor", -1.5),
    ("repulsed", -2.5),
    ("revolting", -2.6),
    ("sad", -2.1),
    ("scared", -2.2),
    ("sick", -1.8),
    ("sorrow", -2.4),
    ("stress", -1.7),
    ("stressed", -1.8),
    ("tensed", -1.4),
    ("terrible", -2.6),
    ("terrified", -3.0),
    ("tired", -1.2),
    ("unacceptable", -2.0),
    ("unhappy", -2.1),
    ("upset", -2.0),
    ("vile", -2.7),
    ("worried", -1.8),
    ("worry", -1.7),
    ("worst", -3.1),
    ("worthless", -2.6),
    ("wrong", -1.6),
];

/// Intensity boosters and dampeners (applied to the following valenced word)
const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", 0.293),
    ("completely", 0.293),
    ("deeply", 0.293),
    ("extremely", 0.293),
    ("incredibly", 0.293),
    ("really", 0.293),
    ("so", 0.293),
    ("totally", 0.293),
    ("utterly", 0.293),
    ("very", 0.293),
    ("barely", -0.293),
    ("hardly", -0.293),
    ("kind", -0.293), // "kind of"
    ("slightly", -0.293),
    ("somewhat", -0.293),
];

/// Negation words (plus any token ending in n't)
const NEGATIONS: &[&str] = &[
    "not", "no", "never", "none", "nothing", "neither", "nor", "cannot", "cant", "dont", "wont",
    "isnt", "wasnt", "aint",
];

/// Valence scaling applied by a preceding negation (sign flip + dampening)
const NEGATION_SCALE: f64 = -0.74;

/// Per-exclamation emphasis added to the summed valence, sign-aligned
const EXCLAIM_BOOST: f64 = 0.292;

/// At most this many exclamation marks count toward emphasis
const MAX_EXCLAIM: usize = 4;

/// Compound normalization constant (VADER's alpha)
const COMPOUND_ALPHA: f64 = 15.0;

lazy_static! {
    static ref VALENCES: HashMap<&'static str, f64> = LEXICON.iter().copied().collect();
    static ref BOOSTS: HashMap<&'static str, f64> = BOOSTERS.iter().copied().collect();
    static ref RE_WORD: Regex = Regex::new(r"[A-Za-z']+").unwrap();
}

/// Default offline analyzer. Construct once and share.
#[derive(Debug, Default)]
pub struct LexiconAnalyzer;

impl LexiconAnalyzer {
    /// Create new analyzer
    pub fn new() -> Self {
        Self
    }
}

impl PolarityAnalyzer for LexiconAnalyzer {
    fn analyze(&self, text: &str) -> PolarityReading {
        let tokens: Vec<String> = RE_WORD
            .find_iter(text)
            .map(|m| m.as_str().to_lowercase())
            .collect();

        let mut pos_sum = 0.0;
        let mut neg_sum = 0.0;
        let mut neutral = 0usize;
        let mut total_valence = 0.0;

        for (i, token) in tokens.iter().enumerate() {
            let word = token.trim_matches('\'');
            let Some(&base) = VALENCES.get(word) else {
                neutral += 1;
                continue;
            };

            let mut valence = base;

            // Boosters in the two preceding tokens
            for prev in tokens[i.saturating_sub(2)..i].iter() {
                if let Some(&boost) = BOOSTS.get(prev.as_str()) {
                    valence += boost * valence.signum();
                }
            }

            // Negation in the three preceding tokens flips and dampens
            let negated = tokens[i.saturating_sub(3)..i]
                .iter()
                .any(|prev| is_negation(prev));
            if negated {
                valence *= NEGATION_SCALE;
            }

            if valence > 0.0 {
                pos_sum += valence;
            } else {
                neg_sum += -valence;
            }
            total_valence += valence;
        }

        // Exclamation emphasis, sign-aligned with the summed valence
        let excls = text.chars().filter(|&c| c == '!').count().min(MAX_EXCLAIM);
        if total_valence != 0.0 {
            total_valence += excls as f64 * EXCLAIM_BOOST * total_valence.signum();
        }

        let compound =
            (total_valence / (total_valence * total_valence + COMPOUND_ALPHA).sqrt()).clamp(-1.0, 1.0);

        let mass = pos_sum + neg_sum + neutral as f64;
        let (positive, negative) = if mass > 0.0 {
            (pos_sum / mass, neg_sum / mass)
        } else {
            (0.0, 0.0)
        };

        PolarityReading {
            positive,
            negative,
            compound,
        }
    }
}

/// Negation word, or any n't contraction
fn is_negation(token: &str) -> bool {
    NEGATIONS.contains(&token) || token.ends_with("n't")
}

// =============================================================================
// TESTS
// =============================================================================
