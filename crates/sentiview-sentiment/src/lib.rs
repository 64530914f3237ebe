//! Sentiment analysis pipeline for sentiview.
//!
//! Cleans free-form comment text, scores polarity against a general-purpose
//! lexicon, labels each comment via fixed thresholds, and aggregates label
//! counts and word frequencies for tables and charts.

pub mod normalize;
pub mod pipeline;
pub mod scorer;
pub mod types;

pub use normalize::clean_text;
pub use pipeline::{analyze_comment, analyze_comments, summarize, word_frequencies};
pub use scorer::polarity_score;
pub use types::SentimentSummary;
