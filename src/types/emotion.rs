//! The closed emotion category set

use serde::{Deserialize, Serialize};

/// The five emotion categories, in fixed declaration order.
///
/// The order matters: dominant-emotion ties are broken by the first
/// category in this order, and all iteration follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Anger,
    Disgust,
    Fear,
    Joy,
    Sadness,
}

impl Emotion {
    /// All categories in tie-break order
    pub const ALL: [Emotion; 5] = [
        Emotion::Anger,
        Emotion::Disgust,
        Emotion::Fear,
        Emotion::Joy,
        Emotion::Sadness,
    ];

    /// Get ANSI color code for terminal display
    pub fn color_code(&self) -> &'static str {
        match self {
            Emotion::Anger => "\x1b[31m",   // Red
            Emotion::Disgust => "\x1b[35m", // Magenta
            Emotion::Fear => "\x1b[36m",    // Cyan
            Emotion::Joy => "\x1b[32m",     // Green
            Emotion::Sadness => "\x1b[34m", // Blue
        }
    }

    /// Reset ANSI color
    pub fn color_reset() -> &'static str {
        "\x1b[0m"
    }

    /// Get emoji for category
    pub fn emoji(&self) -> &'static str {
        match self {
            Emotion::Anger => "😠",
            Emotion::Disgust => "🤢",
            Emotion::Fear => "😨",
            Emotion::Joy => "😊",
            Emotion::Sadness => "😢",
        }
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Emotion::Anger => "anger",
            Emotion::Disgust => "disgust",
            Emotion::Fear => "fear",
            Emotion::Joy => "joy",
            Emotion::Sadness => "sadness",
        };
        write!(f, "{}", name)
    }
}
