use clap::Parser;

use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["sentiview"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_columns_command() {
    let cli = Cli::try_parse_from(["sentiview", "columns", "comments.csv"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Columns { ref file }) if file == &PathBuf::from("comments.csv")
    ));
}

#[test]
fn parses_analyze_defaults() {
    let cli = Cli::try_parse_from(["sentiview", "analyze", "comments.csv"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Analyze {
            column: None,
            limit: None,
            ..
        })
    ));
}

#[test]
fn parses_analyze_with_column_and_limit() {
    let cli = Cli::try_parse_from([
        "sentiview", "analyze", "comments.csv", "--column", "feedback", "--limit", "25",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Analyze {
            column: Some(ref c),
            limit: Some(25),
            ..
        }) if c == "feedback"
    ));
}

#[test]
fn parses_report_with_column() {
    let cli =
        Cli::try_parse_from(["sentiview", "report", "comments.csv", "--column", "feedback"])
            .unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Report {
            column: Some(ref c),
            ..
        }) if c == "feedback"
    ));
}

#[test]
fn parses_export_with_wordclouds() {
    let cli = Cli::try_parse_from([
        "sentiview",
        "export",
        "comments.csv",
        "--output",
        "annotated.csv",
        "--wordclouds",
        "clouds",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Export {
            ref output,
            wordclouds: Some(ref dir),
            ..
        }) if output == &PathBuf::from("annotated.csv") && dir == &PathBuf::from("clouds")
    ));
}

#[test]
fn parses_every_chart_kind() {
    for (raw, kind) in [
        ("bar", ChartKind::Bar),
        ("pie", ChartKind::Pie),
        ("wordcloud", ChartKind::Wordcloud),
    ] {
        let cli = Cli::try_parse_from([
            "sentiview",
            "chart",
            "comments.csv",
            "--kind",
            raw,
            "--output",
            "chart.svg",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Chart { kind: k, .. }) if k == kind
        ));
    }
}

#[test]
fn unknown_chart_kind_is_rejected() {
    let result = Cli::try_parse_from([
        "sentiview",
        "chart",
        "comments.csv",
        "--kind",
        "scatter",
        "--output",
        "chart.svg",
    ]);
    assert!(result.is_err());
}

mod end_to_end {
    use std::fs;

    use sentiview_core::AppConfig;

    use crate::{analyze, output, ChartKind};

    fn sample_csv(dir: &tempfile::TempDir) -> std::path::PathBuf {
        let path = dir.path().join("comments.csv");
        fs::write(
            &path,
            "comment\nAbsolutely love it, great quality\nTerrible, broken on arrival\nArrived on a Tuesday\n",
        )
        .unwrap();
        path
    }

    #[test]
    fn analyze_runs_over_a_sample_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = sample_csv(&dir);
        analyze::run_analyze(&file, None, None, &AppConfig::default()).unwrap();
    }

    #[test]
    fn analyze_of_empty_file_warns_and_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("empty.csv");
        fs::write(&file, "").unwrap();
        analyze::run_analyze(&file, None, None, &AppConfig::default()).unwrap();
    }

    #[test]
    fn multi_column_file_without_selection_fails_when_not_interactive() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("two.csv");
        fs::write(&file, "id,comment\n1,nice\n").unwrap();
        let result = analyze::run_analyze(&file, None, None, &AppConfig::default());
        assert!(result.is_err());
    }

    #[test]
    fn export_writes_annotated_csv_and_wordclouds() {
        let dir = tempfile::tempdir().unwrap();
        let file = sample_csv(&dir);
        let out = dir.path().join("annotated.csv");
        let clouds = dir.path().join("clouds");

        output::run_export(&file, &out, None, Some(&clouds), &AppConfig::default()).unwrap();

        let contents = fs::read_to_string(&out).unwrap();
        assert!(contents.starts_with("Text,Cleaned_Text,Sentiment,Polarity"));
        assert!(clouds.join("wordcloud_all_comments.svg").exists());
        assert!(clouds.join("wordcloud_positive.svg").exists());
        assert!(clouds.join("wordcloud_negative.svg").exists());
    }

    #[test]
    fn chart_writes_an_svg_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = sample_csv(&dir);
        let out = dir.path().join("bar.svg");

        output::run_chart(&file, ChartKind::Bar, &out, None, &AppConfig::default()).unwrap();

        let svg = fs::read_to_string(&out).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Sentiment Distribution"));
    }
}
