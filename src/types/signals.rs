//! Style signal structures for the surface-feature extractor

use serde::{Deserialize, Serialize};

/// Raw surface features counted from the text (no word meaning involved)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleFeatures {
    /// Count of '!' characters
    pub exclamations: usize,
    /// Count of '?' characters
    pub questions: usize,
    /// Fraction of alphabetic tokens (length >= 2) that are ALL-CAPS
    pub caps_ratio: f64,
    /// Any character immediately repeated 3+ times ("sooo", "!!!!")
    pub elongation: bool,
}

/// Sigmoid-squashed style signals fed to the emotion scorer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleSignals {
    /// Shouting/emphasis signal, in (0, 1) (weights: 0.8 excl, 3.0 caps, 0.8 elong)
    pub anger_signal: f64,
    /// Questioning/uncertainty signal, in (0, 1) (weights: 0.9 ques, -0.5 caps)
    pub fear_signal: f64,
    /// Fixed disgust base (0.10), no lexical cue
    pub disgust_base: f64,
    /// The raw features the signals were derived from
    pub features: StyleFeatures,
}
