//! Analysis command handlers for the CLI.
//!
//! These run the whole pipeline synchronously: load, clean, score, print.
//! An empty dataset is a warning and a clean exit, never a failure.

use std::io::{BufRead, IsTerminal, Write};
use std::path::Path;

use sentiview_core::{AnalyzedComment, AppConfig, SentimentLabel};
use sentiview_ingest::{list_columns, load_comments, IngestError, LoadedComments};
use sentiview_sentiment::{analyze_comments, summarize, word_frequencies};

/// Print the columns available for analysis.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub(crate) fn run_columns(file: &Path) -> anyhow::Result<()> {
    let columns = list_columns(file)?;
    if columns.is_empty() {
        println!("no columns found in {}", file.display());
        return Ok(());
    }
    for column in &columns {
        println!("{column}");
    }
    Ok(())
}

/// Load comments, falling back to an interactive column prompt when the file
/// has several columns, none was selected, and stdin is a terminal.
pub(crate) fn load_with_selection(
    file: &Path,
    column: Option<&str>,
) -> anyhow::Result<LoadedComments> {
    match load_comments(file, column) {
        Ok(loaded) => Ok(loaded),
        Err(IngestError::ColumnRequired { available }) if std::io::stdin().is_terminal() => {
            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            let mut out = std::io::stdout();
            let Some(choice) = prompt_column_selection(&available, &mut input, &mut out)? else {
                anyhow::bail!("no column selected");
            };
            Ok(load_comments(file, Some(&choice))?)
        }
        Err(e) => Err(e.into()),
    }
}

/// Numbered column picker.
///
/// Decoupled from the real stdin/stdout so it can be tested with buffers.
/// Accepts either the number or the exact column name; anything else (or an
/// empty line) selects nothing.
pub(crate) fn prompt_column_selection(
    columns: &[String],
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<Option<String>> {
    writeln!(out, "select the column containing the text to analyze:")?;
    for (i, name) in columns.iter().enumerate() {
        writeln!(out, "  {}) {name}", i + 1)?;
    }
    write!(out, "column [1-{}]: ", columns.len())?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<usize>() {
        Ok(n) if (1..=columns.len()).contains(&n) => Ok(Some(columns[n - 1].clone())),
        _ => Ok(columns.iter().find(|c| c.as_str() == trimmed).cloned()),
    }
}

/// Analyze a file and print the labeled table plus a summary line.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the column selection fails.
pub(crate) fn run_analyze(
    file: &Path,
    column: Option<&str>,
    limit: Option<usize>,
    config: &AppConfig,
) -> anyhow::Result<()> {
    let loaded = load_with_selection(file, column)?;
    if loaded.texts.is_empty() {
        println!("no comments found in {}; nothing to analyze", file.display());
        return Ok(());
    }

    let analyzed = analyze_comments(&loaded.texts, config);
    print_table(&analyzed, limit);

    let summary = summarize(&analyzed);
    println!();
    println!(
        "{} rows: {} positive, {} neutral, {} negative (mean polarity {:+.3})",
        summary.total(),
        summary.positive,
        summary.neutral,
        summary.negative,
        summary.mean_polarity
    );
    Ok(())
}

fn print_table(comments: &[AnalyzedComment], limit: Option<usize>) {
    let shown = limit.unwrap_or(comments.len()).min(comments.len());

    println!("{:<62}{:<12}POLARITY", "TEXT", "SENTIMENT");
    for comment in &comments[..shown] {
        println!(
            "{:<62}{:<12}{:+.3}",
            truncate(&comment.text, 60),
            comment.label,
            comment.polarity
        );
    }
    if shown < comments.len() {
        println!("... {} more rows", comments.len() - shown);
    }
}

/// Shorten display text to `max_chars`, never splitting a multibyte char.
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{cut}...")
}

/// Print a markdown summary report for a file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the column selection fails.
pub(crate) fn run_report(
    file: &Path,
    column: Option<&str>,
    config: &AppConfig,
) -> anyhow::Result<()> {
    let loaded = load_with_selection(file, column)?;
    if loaded.texts.is_empty() {
        println!("no comments found in {}; nothing to report", file.display());
        return Ok(());
    }

    let analyzed = analyze_comments(&loaded.texts, config);
    let summary = summarize(&analyzed);
    let top_words = word_frequencies(&analyzed, None, 10);

    let now = chrono::Utc::now().format("%Y-%m-%d %H:%M UTC");
    println!("# Sentiment Report");
    println!();
    println!("**Generated**: {now}");
    println!("**Source**: {}", file.display());
    println!("**Column**: {}", loaded.column);
    println!("**Rows**: {}", summary.total());
    println!();
    println!("---");
    println!();
    println!("| Sentiment | Count | Share |");
    println!("|-----------|-------|-------|");
    for label in SentimentLabel::ALL {
        println!(
            "| {label} | {} | {:.1}% |",
            summary.count(label),
            summary.share(label)
        );
    }
    println!();
    println!("**Mean polarity**: {:+.3}", summary.mean_polarity);
    if !top_words.is_empty() {
        let words: Vec<String> = top_words
            .iter()
            .map(|(word, count)| format!("{word} ({count})"))
            .collect();
        println!();
        println!("**Top words**: {}", words.join(", "));
    }
    Ok(())
}
