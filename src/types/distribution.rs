//! Normalized emotion distribution - the detector's return value

use crate::types::{Emotion, EmotionScores};
use serde::{Deserialize, Serialize};

/// A probability distribution over the five categories.
///
/// Exactly one of two shapes:
/// - all five values `Some`, finite, non-negative, summing to 1, and
///   `dominant_emotion` set to the maximum category (ties broken by
///   [`Emotion::ALL`] order), or
/// - the absent sentinel: all five values `None` and no dominant. This is
///   how "no emotion could be determined" is reported; it is not an error.
///
/// Serializes with `null` for absent values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionDistribution {
    pub anger: Option<f64>,
    pub disgust: Option<f64>,
    pub fear: Option<f64>,
    pub joy: Option<f64>,
    pub sadness: Option<f64>,
    pub dominant_emotion: Option<Emotion>,
}

impl EmotionDistribution {
    /// The absent sentinel - every value null, no dominant
    pub fn absent() -> Self {
        Self {
            anger: None,
            disgust: None,
            fear: None,
            joy: None,
            sadness: None,
            dominant_emotion: None,
        }
    }

    /// Normalize raw scores into a distribution.
    ///
    /// Total mass <= 0 yields the absent sentinel. Otherwise each score is
    /// divided by the total and the dominant category is the maximum,
    /// first-in-order on exact ties.
    pub fn from_scores(scores: &EmotionScores) -> Self {
        let total = scores.total();
        if total <= 0.0 {
            return Self::absent();
        }

        let mut dominant = Emotion::Anger;
        let mut best = f64::NEG_INFINITY;
        for emotion in Emotion::ALL {
            let value = scores.get(emotion) / total;
            if value > best {
                best = value;
                dominant = emotion;
            }
        }

        Self {
            anger: Some(scores.anger / total),
            disgust: Some(scores.disgust / total),
            fear: Some(scores.fear / total),
            joy: Some(scores.joy / total),
            sadness: Some(scores.sadness / total),
            dominant_emotion: Some(dominant),
        }
    }

    /// True if this is the absent sentinel
    pub fn is_absent(&self) -> bool {
        self.dominant_emotion.is_none()
    }

    /// Value for one category (None on the absent sentinel)
    pub fn get(&self, emotion: Emotion) -> Option<f64> {
        match emotion {
            Emotion::Anger => self.anger,
            Emotion::Disgust => self.disgust,
            Emotion::Fear => self.fear,
            Emotion::Joy => self.joy,
            Emotion::Sadness => self.sadness,
        }
    }

    /// Iterate categories with their values, in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (Emotion, Option<f64>)> + '_ {
        Emotion::ALL.into_iter().map(|e| (e, self.get(e)))
    }
}
