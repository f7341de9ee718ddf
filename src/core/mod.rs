//! Core modules for Emolens

pub mod api;
pub mod detector;
pub mod keywords;
pub mod polarity;
pub mod style;

pub use api::{create_router, format_response, run_server, INVALID_TEXT_MESSAGE};
pub use detector::EmotionDetector;
pub use keywords::{has_fear_cue, has_sadness_cue, FEAR_WORDS, SADNESS_WORDS};
pub use polarity::{LexiconAnalyzer, PolarityAnalyzer};
pub use style::StyleExtractor;
