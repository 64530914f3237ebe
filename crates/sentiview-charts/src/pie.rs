//! Pie chart of the sentiment distribution.

use sentiview_core::AppConfig;
use sentiview_sentiment::SentimentSummary;

use crate::error::ChartError;
use crate::palette::label_color;
use crate::svg::{Anchor, SvgBuilder};

/// Wedges start at 140 degrees and proceed counterclockwise.
const START_ANGLE_DEG: f32 = 140.0;

/// Render the label shares as a pie chart.
///
/// Each wedge is annotated with its label and percentage (one decimal).
///
/// # Errors
///
/// Returns [`ChartError::NoData`] for an empty table.
#[allow(clippy::cast_precision_loss)]
pub fn render_pie_chart(
    summary: &SentimentSummary,
    config: &AppConfig,
) -> Result<String, ChartError> {
    let counts = summary.counts_desc();
    if counts.is_empty() {
        return Err(ChartError::NoData);
    }

    let width = config.chart_width as f32;
    let height = config.chart_height as f32;
    let cx = width / 2.0;
    let cy = height / 2.0 + 10.0;
    let radius = (width.min(height) / 2.0 - 60.0).max(40.0);
    let total = summary.total() as f32;

    let mut svg = SvgBuilder::new(config.chart_width, config.chart_height)?;
    svg.title(config.chart_width, "Sentiment Distribution (Pie Chart)")?;

    let mut angle = START_ANGLE_DEG.to_radians();

    for &(label, count) in &counts {
        let fraction = count as f32 / total;
        let sweep = fraction * std::f32::consts::TAU;
        let end = angle + sweep;
        let fill = label_color(label);

        if counts.len() == 1 {
            // A full-circle arc degenerates to a point; draw a disc instead.
            svg.circle(cx, cy, radius, fill)?;
        } else {
            let (x0, y0) = point_on(cx, cy, radius, angle);
            let (x1, y1) = point_on(cx, cy, radius, end);
            let large_arc = i32::from(sweep > std::f32::consts::PI);
            let d = format!(
                "M {cx:.1} {cy:.1} L {x0:.1} {y0:.1} A {radius:.1} {radius:.1} 0 {large_arc} 0 {x1:.1} {y1:.1} Z"
            );
            svg.path(&d, fill)?;
        }

        let mid = angle + sweep / 2.0;
        let (lx, ly) = point_on(cx, cy, radius * 1.18, mid);
        svg.text(lx, ly, 13.0, "#333333", Anchor::Middle, false, label.as_str())?;

        let (px, py) = point_on(cx, cy, radius * 0.62, mid);
        let percent = format!("{:.1}%", fraction * 100.0);
        svg.text(px, py, 12.0, "white", Anchor::Middle, true, &percent)?;

        angle = end;
    }

    svg.finish()
}

/// Screen coordinates of the point at `angle` (radians, counterclockwise
/// from the positive x axis) on the circle around `(cx, cy)`.
fn point_on(cx: f32, cy: f32, r: f32, angle: f32) -> (f32, f32) {
    (cx + r * angle.cos(), cy - r * angle.sin())
}
