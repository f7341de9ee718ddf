//! Raw per-category scores before normalization

use crate::types::Emotion;
use serde::{Deserialize, Serialize};

/// Five non-negative raw scores, one per category.
///
/// Scores are raw mass, not probabilities; the normalizer turns them
/// into an [`EmotionDistribution`](crate::types::EmotionDistribution).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmotionScores {
    pub anger: f64,
    pub disgust: f64,
    pub fear: f64,
    pub joy: f64,
    pub sadness: f64,
}

impl EmotionScores {
    /// All-zero scores
    pub fn zero() -> Self {
        Self::default()
    }

    /// Score for one category
    pub fn get(&self, emotion: Emotion) -> f64 {
        match emotion {
            Emotion::Anger => self.anger,
            Emotion::Disgust => self.disgust,
            Emotion::Fear => self.fear,
            Emotion::Joy => self.joy,
            Emotion::Sadness => self.sadness,
        }
    }

    /// Total raw mass across all five categories
    pub fn total(&self) -> f64 {
        self.anger + self.disgust + self.fear + self.joy + self.sadness
    }
}
