//! Polarity reading produced by the sentiment analyzer

use serde::{Deserialize, Serialize};

/// One polarity reading for a piece of text.
///
/// Bounds: `positive` and `negative` are in [0, 1]; `compound` is in
/// [-1, 1] with higher values for more positive text. Any analyzer
/// honoring these bounds is interchangeable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PolarityReading {
    /// Positive intensity
    pub positive: f64,
    /// Negative intensity
    pub negative: f64,
    /// Overall valence, -1 (most negative) to +1 (most positive)
    pub compound: f64,
}

impl PolarityReading {
    /// A fully neutral reading
    pub fn neutral() -> Self {
        Self {
            positive: 0.0,
            negative: 0.0,
            compound: 0.0,
        }
    }
}
