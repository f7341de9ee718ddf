//! Output structure for terminal display

use crate::types::{Emotion, EmotionDistribution};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Output structure for one detection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionOutput {
    /// Timestamp
    pub timestamp: DateTime<Utc>,
    /// The normalized distribution (or absent sentinel)
    #[serde(flatten)]
    pub distribution: EmotionDistribution,
}

impl DetectionOutput {
    /// Create new output
    pub fn new(distribution: EmotionDistribution) -> Self {
        Self {
            timestamp: Utc::now(),
            distribution,
        }
    }

    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        let Some(dominant) = self.distribution.dominant_emotion else {
            return format!("\x1b[90mno emotion detected{}", Emotion::color_reset());
        };

        let color = dominant.color_code();
        let reset = Emotion::color_reset();
        let values: Vec<String> = self
            .distribution
            .iter()
            .map(|(e, v)| format!("{}={:.3}", e, v.unwrap_or(0.0)))
            .collect();

        format!(
            "{}{} {} | dominant={}{}",
            color,
            dominant.emoji(),
            values.join(" "),
            dominant,
            reset
        )
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        if self.distribution.is_absent() {
            return "dominant=none".to_string();
        }
        let values: Vec<String> = self
            .distribution
            .iter()
            .map(|(e, v)| format!("{}={:.3}", e, v.unwrap_or(0.0)))
            .collect();
        let dominant = self
            .distribution
            .dominant_emotion
            .map(|e| e.to_string())
            .unwrap_or_default();
        format!("{} | dominant={}", values.join(" "), dominant)
    }
}
