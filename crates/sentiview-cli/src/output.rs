//! Export and chart command handlers.

use std::path::{Path, PathBuf};

use sentiview_charts::palette::wordcloud_ramp;
use sentiview_charts::{render_bar_chart, render_pie_chart, render_word_cloud, ChartError};
use sentiview_core::{AnalyzedComment, AppConfig, SentimentLabel};
use sentiview_ingest::write_annotated_csv;
use sentiview_sentiment::{analyze_comments, summarize, word_frequencies};

use crate::analyze::load_with_selection;
use crate::ChartKind;

/// Analyze a file and write the annotated CSV, optionally with word clouds.
///
/// # Errors
///
/// Returns an error if loading, analysis output, or file writes fail.
pub(crate) fn run_export(
    file: &Path,
    output: &Path,
    column: Option<&str>,
    wordclouds: Option<&Path>,
    config: &AppConfig,
) -> anyhow::Result<()> {
    let loaded = load_with_selection(file, column)?;
    if loaded.texts.is_empty() {
        println!("no comments found in {}; nothing to export", file.display());
        return Ok(());
    }

    let analyzed = analyze_comments(&loaded.texts, config);
    write_annotated_csv(output, &analyzed)?;
    println!("exported {} rows to {}", analyzed.len(), output.display());

    if let Some(dir) = wordclouds {
        std::fs::create_dir_all(dir)?;
        write_word_clouds(dir, &analyzed, config)?;
    }
    Ok(())
}

/// Write the all-comments cloud plus one cloud per label with any rows.
///
/// Empty clouds (a label nobody used, or cleaned text with no words) are
/// skipped with a warning rather than failing the export.
fn write_word_clouds(
    dir: &Path,
    analyzed: &[AnalyzedComment],
    config: &AppConfig,
) -> anyhow::Result<()> {
    let mut targets: Vec<(Option<SentimentLabel>, String, PathBuf)> = vec![(
        None,
        "Word Cloud of All Comments".to_string(),
        dir.join("wordcloud_all_comments.svg"),
    )];
    for label in SentimentLabel::ALL {
        targets.push((
            Some(label),
            format!("Word Cloud - {label} Comments"),
            dir.join(format!("wordcloud_{}.svg", label.as_str().to_lowercase())),
        ));
    }

    for (label, title, path) in targets {
        let frequencies = word_frequencies(analyzed, label, config.wordcloud_max_words);
        match render_word_cloud(&frequencies, &title, wordcloud_ramp(label), config) {
            Ok(svg) => {
                std::fs::write(&path, svg)?;
                println!("wrote {}", path.display());
            }
            Err(ChartError::NoData) => {
                tracing::warn!(cloud = %title, "no words to draw, skipping");
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

/// Analyze a file and render one aggregate chart to an SVG file.
///
/// # Errors
///
/// Returns an error if loading, rendering, or the file write fails.
pub(crate) fn run_chart(
    file: &Path,
    kind: ChartKind,
    output: &Path,
    column: Option<&str>,
    config: &AppConfig,
) -> anyhow::Result<()> {
    let loaded = load_with_selection(file, column)?;
    if loaded.texts.is_empty() {
        println!("no comments found in {}; nothing to chart", file.display());
        return Ok(());
    }

    let analyzed = analyze_comments(&loaded.texts, config);
    let svg = match kind {
        ChartKind::Bar => render_bar_chart(&summarize(&analyzed), config)?,
        ChartKind::Pie => render_pie_chart(&summarize(&analyzed), config)?,
        ChartKind::Wordcloud => {
            let frequencies = word_frequencies(&analyzed, None, config.wordcloud_max_words);
            render_word_cloud(
                &frequencies,
                "Word Cloud of All Comments",
                wordcloud_ramp(None),
                config,
            )?
        }
    };

    std::fs::write(output, svg)?;
    println!("wrote {}", output.display());
    Ok(())
}
