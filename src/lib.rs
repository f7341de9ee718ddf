//! Emolens: offline emotion detection for short text
//!
//! Pipeline: text → lexicon polarity → style signals → emotion scorer → distribution

pub mod core;
pub mod types;

// =============================================================================
// NEUTRAL GATE THRESHOLDS [C]
// =============================================================================

/// Compound values strictly inside (-GATE, +GATE) are candidates for the neutral gate
pub const NEUTRAL_COMPOUND_GATE: f64 = 0.05;

/// Neutral gate also requires max(pos, neg) below this
pub const NEUTRAL_INTENSITY_GATE: f64 = 0.05;

// =============================================================================
// STYLE SIGNAL WEIGHTS [C] - empirically tuned, do not simplify
// =============================================================================

/// Per-exclamation-mark weight in the anger signal
pub const STYLE_ANGER_EXCLAIM: f64 = 0.8;

/// ALL-CAPS token ratio weight in the anger signal
pub const STYLE_ANGER_CAPS: f64 = 3.0;

/// Character-elongation weight in the anger signal
pub const STYLE_ANGER_ELONG: f64 = 0.8;

/// Bias term for the anger sigmoid
pub const STYLE_ANGER_BIAS: f64 = -1.0;

/// Per-question-mark weight in the fear signal
pub const STYLE_FEAR_QUESTION: f64 = 0.9;

/// Caps ratio weight in the fear signal (yelling reads as anger, not fear)
pub const STYLE_FEAR_CAPS: f64 = -0.5;

/// Bias term for the fear sigmoid
pub const STYLE_FEAR_BIAS: f64 = -0.2;

/// Fixed disgust base - no lexical cue is used for disgust
pub const DISGUST_BASE: f64 = 0.10;

/// Uppercase fraction for a token to count as ALL-CAPS
pub const CAPS_TOKEN_FRACTION: f64 = 0.8;

// =============================================================================
// SCORER WEIGHTS [C]
// =============================================================================

/// Floor for joy when the analyzer reports zero positive intensity
pub const JOY_FLOOR: f64 = 0.01;

/// Compound-derived joy fallback: max(JOY_FLOOR, JOY_COMPOUND_BASE + comp * JOY_COMPOUND_SCALE)
pub const JOY_COMPOUND_BASE: f64 = 0.05;
pub const JOY_COMPOUND_SCALE: f64 = 0.5;

/// Fraction of joy that leaks into the negative categories
pub const POSITIVE_LEAK: f64 = 0.15;

/// Disgust share of the positive-branch leak
pub const LEAK_DISGUST_SHARE: f64 = 0.10;

/// Floor for negative mass when the analyzer reports zero negative intensity
pub const NEG_FLOOR: f64 = 0.05;

/// Compound-derived negative fallback scale
pub const NEG_COMPOUND_SCALE: f64 = 0.4;

/// Anger share of the negative mass (scaled by the anger signal)
pub const NEG_ANGER_SHARE: f64 = 0.40;

/// Fear share of the negative mass (scaled by the fear signal)
pub const NEG_FEAR_SHARE: f64 = 0.35;

/// Residual joy allowed on mixed-sentiment negative text
pub const NEG_JOY_RESIDUAL: f64 = 0.1;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
