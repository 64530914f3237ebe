//! Chart colors.
//!
//! Labels keep the fixed green/blue/red scheme of the table view; word
//! clouds shade within the matching color family, darkest for the most
//! frequent words.

use sentiview_core::SentimentLabel;

/// Solid fill used for a label's bar and pie wedge.
#[must_use]
pub fn label_color(label: SentimentLabel) -> &'static str {
    match label {
        SentimentLabel::Positive => "green",
        SentimentLabel::Neutral => "blue",
        SentimentLabel::Negative => "red",
    }
}

const GREENS: &[&str] = &["#1b5e20", "#2e7d32", "#43a047", "#66bb6a", "#81c784"];
const BLUES: &[&str] = &["#0d47a1", "#1565c0", "#1e88e5", "#42a5f5", "#64b5f6"];
const REDS: &[&str] = &["#b71c1c", "#c62828", "#e53935", "#ef5350", "#e57373"];
const GREYS: &[&str] = &["#263238", "#37474f", "#455a64", "#546e7a", "#607d8b"];

/// Shade ramp for a word cloud. `None` is the all-comments cloud.
#[must_use]
pub fn wordcloud_ramp(label: Option<SentimentLabel>) -> &'static [&'static str] {
    match label {
        Some(SentimentLabel::Positive) => GREENS,
        Some(SentimentLabel::Neutral) => BLUES,
        Some(SentimentLabel::Negative) => REDS,
        None => GREYS,
    }
}
