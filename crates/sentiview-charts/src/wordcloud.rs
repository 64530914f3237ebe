//! Word cloud rendering.
//!
//! Words are scaled linearly between a minimum and maximum font size by
//! frequency and flowed left-to-right into rows. The layout is fully
//! deterministic: same frequencies, same picture.

use sentiview_core::AppConfig;

use crate::error::ChartError;
use crate::svg::{Anchor, SvgBuilder};

const MIN_FONT: f32 = 14.0;
const MAX_FONT: f32 = 64.0;
const MARGIN: f32 = 16.0;
const WORD_GAP: f32 = 14.0;
/// Approximate glyph width as a fraction of the font size.
const GLYPH_ASPECT: f32 = 0.6;

/// Render `frequencies` (already capped and ordered, see
/// `word_frequencies`) as a word cloud titled `title`, colored from
/// `ramp` darkest-first.
///
/// Words that no longer fit the canvas are dropped from the tail.
///
/// # Errors
///
/// Returns [`ChartError::NoData`] when there are no words to draw.
#[allow(clippy::cast_precision_loss)]
pub fn render_word_cloud(
    frequencies: &[(String, usize)],
    title: &str,
    ramp: &[&str],
    config: &AppConfig,
) -> Result<String, ChartError> {
    if frequencies.is_empty() {
        return Err(ChartError::NoData);
    }

    let width = config.chart_width as f32;
    let height = config.chart_height as f32;

    let max_count = frequencies.iter().map(|&(_, c)| c).max().unwrap_or(1);
    let min_count = frequencies.iter().map(|&(_, c)| c).min().unwrap_or(1);

    let font_size = |count: usize| -> f32 {
        if max_count == min_count {
            return (MIN_FONT + MAX_FONT) / 2.0;
        }
        let t = (count - min_count) as f32 / (max_count - min_count) as f32;
        MIN_FONT + t * (MAX_FONT - MIN_FONT)
    };

    let mut svg = SvgBuilder::new(config.chart_width, config.chart_height)?;
    svg.title(config.chart_width, title)?;

    let mut x = MARGIN;
    let mut y = MARGIN + 40.0 + MAX_FONT;
    let mut row_max_font = 0.0_f32;
    let mut drawn = 0usize;

    for (rank, (word, count)) in frequencies.iter().enumerate() {
        let size = font_size(*count);
        let word_width = size * GLYPH_ASPECT * word.chars().count() as f32;

        if x + word_width > width - MARGIN && x > MARGIN {
            x = MARGIN;
            y += row_max_font * 1.25;
            row_max_font = 0.0;
        }
        if y > height - MARGIN {
            tracing::debug!(
                dropped = frequencies.len() - drawn,
                "word cloud canvas full, dropping least frequent words"
            );
            break;
        }

        let color = ramp[rank % ramp.len()];
        svg.text(x, y, size, color, Anchor::Start, false, word)?;

        x += word_width + WORD_GAP;
        row_max_font = row_max_font.max(size);
        drawn += 1;
    }

    svg.finish()
}
