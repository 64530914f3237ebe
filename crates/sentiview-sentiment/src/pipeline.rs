//! Analysis pipeline orchestration.
//!
//! Each run maps the whole comment table through clean → score → label and
//! replaces any previous result wholesale; there is no incremental state.

use std::collections::HashMap;

use sentiview_core::{AnalyzedComment, AppConfig, SentimentLabel};

use crate::normalize::clean_text;
use crate::scorer::polarity_score;
use crate::types::SentimentSummary;

/// Analyze a single comment: clean, score, label.
#[must_use]
pub fn analyze_comment(text: &str, config: &AppConfig) -> AnalyzedComment {
    let cleaned = clean_text(text);
    let polarity = polarity_score(&cleaned);
    let label = SentimentLabel::from_polarity(
        polarity,
        config.positive_threshold,
        config.negative_threshold,
    );
    AnalyzedComment {
        text: text.to_string(),
        cleaned,
        label,
        polarity,
    }
}

/// Analyze every comment in the table.
#[must_use]
pub fn analyze_comments(texts: &[String], config: &AppConfig) -> Vec<AnalyzedComment> {
    let analyzed: Vec<AnalyzedComment> = texts
        .iter()
        .map(|text| analyze_comment(text, config))
        .collect();
    tracing::info!(rows = analyzed.len(), "sentiment analysis complete");
    analyzed
}

/// Aggregate per-label counts and the mean polarity.
#[must_use]
pub fn summarize(comments: &[AnalyzedComment]) -> SentimentSummary {
    let mut summary = SentimentSummary {
        positive: 0,
        neutral: 0,
        negative: 0,
        mean_polarity: 0.0,
    };

    for comment in comments {
        match comment.label {
            SentimentLabel::Positive => summary.positive += 1,
            SentimentLabel::Neutral => summary.neutral += 1,
            SentimentLabel::Negative => summary.negative += 1,
        }
    }

    if !comments.is_empty() {
        #[allow(clippy::cast_precision_loss)]
        let denom = comments.len() as f32;
        let sum: f32 = comments.iter().map(|c| c.polarity).sum();
        summary.mean_polarity = sum / denom;
    }

    summary
}

/// Count word occurrences over the cleaned text.
///
/// With `label = Some(..)` only rows carrying that label contribute. The
/// result is ordered by count descending, ties alphabetically, and truncated
/// to `max_words`, so repeated runs over the same table are identical.
#[must_use]
pub fn word_frequencies(
    comments: &[AnalyzedComment],
    label: Option<SentimentLabel>,
    max_words: usize,
) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for comment in comments {
        if label.is_some_and(|l| l != comment.label) {
            continue;
        }
        for word in comment.cleaned.split_whitespace() {
            *counts.entry(word).or_insert(0) += 1;
        }
    }

    let mut frequencies: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(word, count)| (word.to_string(), count))
        .collect();
    frequencies.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    frequencies.truncate(max_words);
    frequencies
}
