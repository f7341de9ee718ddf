//! Core types for Emolens

mod distribution;
mod emotion;
mod output;
mod polarity;
mod scores;
mod signals;

pub use distribution::EmotionDistribution;
pub use emotion::Emotion;
pub use output::DetectionOutput;
pub use polarity::PolarityReading;
pub use scores::EmotionScores;
pub use signals::{StyleFeatures, StyleSignals};
