//! Entry point wiring CLI dispatch to the analysis pipeline.

mod analyze;
mod output;
#[cfg(test)]
mod tests;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "sentiview")]
#[command(about = "Offline sentiment analysis for comment spreadsheets")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the columns available for analysis in a file
    Columns {
        /// CSV or plain-text input file
        file: PathBuf,
    },
    /// Analyze a file and print the labeled table
    Analyze {
        /// CSV or plain-text input file
        file: PathBuf,

        /// Text column to analyze (required for multi-column files)
        #[arg(long)]
        column: Option<String>,

        /// Print at most this many rows
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Print a markdown summary report
    Report {
        /// CSV or plain-text input file
        file: PathBuf,

        /// Text column to analyze (required for multi-column files)
        #[arg(long)]
        column: Option<String>,
    },
    /// Write the annotated table to a CSV file
    Export {
        /// CSV or plain-text input file
        file: PathBuf,

        /// Output CSV path
        #[arg(long)]
        output: PathBuf,

        /// Text column to analyze (required for multi-column files)
        #[arg(long)]
        column: Option<String>,

        /// Also write word-cloud SVGs into this directory
        #[arg(long)]
        wordclouds: Option<PathBuf>,
    },
    /// Render one aggregate chart to an SVG file
    Chart {
        /// CSV or plain-text input file
        file: PathBuf,

        /// Chart to render
        #[arg(long, value_enum)]
        kind: ChartKind,

        /// Output SVG path
        #[arg(long)]
        output: PathBuf,

        /// Text column to analyze (required for multi-column files)
        #[arg(long)]
        column: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChartKind {
    Bar,
    Pie,
    Wordcloud,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = sentiview_core::load_app_config_from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Columns { file }) => analyze::run_columns(&file),
        Some(Commands::Analyze {
            file,
            column,
            limit,
        }) => analyze::run_analyze(&file, column.as_deref(), limit, &config),
        Some(Commands::Report { file, column }) => {
            analyze::run_report(&file, column.as_deref(), &config)
        }
        Some(Commands::Export {
            file,
            output,
            column,
            wordclouds,
        }) => output::run_export(
            &file,
            &output,
            column.as_deref(),
            wordclouds.as_deref(),
            &config,
        ),
        Some(Commands::Chart {
            file,
            kind,
            output,
            column,
        }) => output::run_chart(&file, kind, &output, column.as_deref(), &config),
        None => {
            println!("no command provided; run `sentiview --help` for usage");
            Ok(())
        }
    }
}
