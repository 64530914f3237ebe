//! Bar chart of the sentiment distribution.

use sentiview_core::AppConfig;
use sentiview_sentiment::SentimentSummary;

use crate::error::ChartError;
use crate::palette::label_color;
use crate::svg::{Anchor, SvgBuilder};

const MARGIN_LEFT: f32 = 60.0;
const MARGIN_RIGHT: f32 = 20.0;
const MARGIN_TOP: f32 = 50.0;
const MARGIN_BOTTOM: f32 = 50.0;

/// Render the label counts as a bar chart, largest bar first.
///
/// # Errors
///
/// Returns [`ChartError::NoData`] for an empty table.
#[allow(clippy::cast_precision_loss)]
pub fn render_bar_chart(
    summary: &SentimentSummary,
    config: &AppConfig,
) -> Result<String, ChartError> {
    let counts = summary.counts_desc();
    if counts.is_empty() {
        return Err(ChartError::NoData);
    }

    let width = config.chart_width as f32;
    let height = config.chart_height as f32;
    let plot_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_height = height - MARGIN_TOP - MARGIN_BOTTOM;
    let baseline = height - MARGIN_BOTTOM;

    // counts_desc is ordered, so the first entry carries the maximum.
    let max_count = counts[0].1 as f32;

    let mut svg = SvgBuilder::new(config.chart_width, config.chart_height)?;
    svg.title(config.chart_width, "Sentiment Distribution")?;

    // Axes.
    svg.line(MARGIN_LEFT, MARGIN_TOP, MARGIN_LEFT, baseline)?;
    svg.line(MARGIN_LEFT, baseline, width - MARGIN_RIGHT, baseline)?;
    svg.text(
        18.0,
        MARGIN_TOP + plot_height / 2.0,
        12.0,
        "#333333",
        Anchor::Middle,
        false,
        "Count",
    )?;
    svg.text(
        MARGIN_LEFT + plot_width / 2.0,
        height - 10.0,
        12.0,
        "#333333",
        Anchor::Middle,
        false,
        "Sentiment",
    )?;

    // Y-axis extremes.
    svg.text(
        MARGIN_LEFT - 8.0,
        baseline + 4.0,
        11.0,
        "#333333",
        Anchor::Middle,
        false,
        "0",
    )?;
    svg.text(
        MARGIN_LEFT - 8.0,
        MARGIN_TOP + 4.0,
        11.0,
        "#333333",
        Anchor::Middle,
        false,
        &counts[0].1.to_string(),
    )?;

    let slot = plot_width / counts.len() as f32;
    let bar_width = slot * 0.6;

    for (i, &(label, count)) in counts.iter().enumerate() {
        let bar_height = plot_height * count as f32 / max_count;
        let x = MARGIN_LEFT + slot * i as f32 + (slot - bar_width) / 2.0;
        let y = baseline - bar_height;

        svg.rect(x, y, bar_width, bar_height, label_color(label))?;
        svg.text(
            x + bar_width / 2.0,
            y - 6.0,
            12.0,
            "#333333",
            Anchor::Middle,
            false,
            &count.to_string(),
        )?;
        svg.text(
            x + bar_width / 2.0,
            baseline + 18.0,
            12.0,
            "#333333",
            Anchor::Middle,
            false,
            label.as_str(),
        )?;
    }

    svg.finish()
}
