//! Shared domain types and configuration for sentiview.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod app_config;
pub mod config;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};

/// Sentiment classification derived from a polarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// All labels in display order.
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Neutral,
        SentimentLabel::Negative,
    ];

    /// Classify a polarity score against fixed thresholds.
    ///
    /// Scores strictly above `positive_threshold` are Positive, strictly
    /// below `negative_threshold` are Negative, everything else (the
    /// thresholds themselves included) is Neutral.
    #[must_use]
    pub fn from_polarity(score: f32, positive_threshold: f32, negative_threshold: f32) -> Self {
        if score > positive_threshold {
            SentimentLabel::Positive
        } else if score < negative_threshold {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Negative => "Negative",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One fully analyzed comment row.
///
/// Field renames match the exported CSV header so the annotated file
/// round-trips through serde unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedComment {
    #[serde(rename = "Text")]
    pub text: String,
    #[serde(rename = "Cleaned_Text")]
    pub cleaned: String,
    #[serde(rename = "Sentiment")]
    pub label: SentimentLabel,
    #[serde(rename = "Polarity")]
    pub polarity: f32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("positive threshold {positive} must not be below negative threshold {negative}")]
    ThresholdOrder { positive: f32, negative: f32 },
}
