//! Comment table loading.
//!
//! Two input shapes are supported, matching the file-picker filters of the
//! tool: `.csv` files with a header row, and plain-text files with one
//! comment per line (tab-delimited, first field wins).

use std::fs;
use std::path::Path;

use crate::error::IngestError;

/// Column name assigned to plain-text input, which carries no header row.
pub const TEXT_COLUMN: &str = "Text";

/// Input shape, decided by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Comma-separated with a header row.
    Csv,
    /// One comment per line; tab-delimited lines keep the first field.
    PlainText,
}

impl SourceFormat {
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => SourceFormat::Csv,
            _ => SourceFormat::PlainText,
        }
    }
}

/// The text column pulled out of an input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedComments {
    /// Name of the column the texts came from.
    pub column: String,
    /// Raw comment texts, one per input row.
    pub texts: Vec<String>,
}

/// Read a file as text, falling back to Latin-1 when it is not valid UTF-8.
///
/// Latin-1 maps every byte to the code point of the same value, so the
/// fallback cannot fail; it only mislabels genuinely exotic encodings.
///
/// # Errors
///
/// Returns [`IngestError::Io`] if the file cannot be read.
pub fn read_file_lossy(path: &Path) -> Result<String, IngestError> {
    let bytes = fs::read(path)?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => {
            tracing::debug!(path = %path.display(), "input is not UTF-8, decoding as Latin-1");
            Ok(err.into_bytes().iter().map(|&b| char::from(b)).collect())
        }
    }
}

/// List the columns available for analysis in `path`.
///
/// Plain-text files always report the single synthetic `Text` column.
///
/// # Errors
///
/// Returns [`IngestError`] if the file cannot be read or its header row
/// cannot be parsed.
pub fn list_columns(path: &Path) -> Result<Vec<String>, IngestError> {
    match SourceFormat::from_path(path) {
        SourceFormat::PlainText => Ok(vec![TEXT_COLUMN.to_string()]),
        SourceFormat::Csv => {
            let content = read_file_lossy(path)?;
            let mut reader = csv::ReaderBuilder::new()
                .flexible(true)
                .from_reader(content.as_bytes());
            let headers = reader.headers()?;
            Ok(headers.iter().map(str::to_string).collect())
        }
    }
}

/// Load the comment texts from `path`.
///
/// Column resolution for CSV input:
/// - a single-column file needs no selection;
/// - a multi-column file requires `column` to name one of the headers.
///
/// Rows shorter than the selected column index yield empty comments rather
/// than errors; the pipeline scores them neutral.
///
/// # Errors
///
/// Returns [`IngestError::ColumnRequired`] when a multi-column file has no
/// selection, [`IngestError::UnknownColumn`] when the selection does not
/// match a header, and I/O or CSV errors from reading the file.
pub fn load_comments(path: &Path, column: Option<&str>) -> Result<LoadedComments, IngestError> {
    match SourceFormat::from_path(path) {
        SourceFormat::PlainText => load_plain_text(path),
        SourceFormat::Csv => load_csv(path, column),
    }
}

fn load_csv(path: &Path, column: Option<&str>) -> Result<LoadedComments, IngestError> {
    let content = read_file_lossy(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    // A file with no header row at all is an empty dataset.
    if headers.is_empty() || (headers.len() == 1 && headers[0].is_empty()) {
        return Ok(LoadedComments {
            column: TEXT_COLUMN.to_string(),
            texts: Vec::new(),
        });
    }

    let index = match column {
        Some(name) => headers
            .iter()
            .position(|h| h.as_str() == name)
            .ok_or_else(|| IngestError::UnknownColumn {
                name: name.to_string(),
                available: headers.clone(),
            })?,
        None if headers.len() == 1 => 0,
        None => {
            return Err(IngestError::ColumnRequired {
                available: headers,
            })
        }
    };

    let mut texts = Vec::new();
    for record in reader.records() {
        let record = record?;
        texts.push(record.get(index).unwrap_or_default().to_string());
    }

    tracing::debug!(
        path = %path.display(),
        column = %headers[index],
        rows = texts.len(),
        "loaded CSV comments"
    );

    Ok(LoadedComments {
        column: headers[index].clone(),
        texts,
    })
}

fn load_plain_text(path: &Path) -> Result<LoadedComments, IngestError> {
    let content = read_file_lossy(path)?;
    let texts: Vec<String> = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.split('\t').next().unwrap_or_default().to_string())
        .collect();

    tracing::debug!(path = %path.display(), rows = texts.len(), "loaded plain-text comments");

    Ok(LoadedComments {
        column: TEXT_COLUMN.to_string(),
        texts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(dir: &tempfile::TempDir, name: &str, contents: &[u8]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).expect("write test file");
        path
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(
            SourceFormat::from_path(Path::new("comments.csv")),
            SourceFormat::Csv
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("comments.CSV")),
            SourceFormat::Csv
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("comments.txt")),
            SourceFormat::PlainText
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("comments")),
            SourceFormat::PlainText
        );
    }

    #[test]
    fn single_column_csv_needs_no_selection() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "c.csv", b"Feedback\ngreat stuff\nawful stuff\n");
        let loaded = load_comments(&path, None).unwrap();
        assert_eq!(loaded.column, "Feedback");
        assert_eq!(loaded.texts, vec!["great stuff", "awful stuff"]);
    }

    #[test]
    fn multi_column_csv_requires_selection() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "c.csv", b"id,comment\n1,nice\n2,bad\n");
        let result = load_comments(&path, None);
        assert!(
            matches!(result, Err(IngestError::ColumnRequired { ref available }) if available == &["id", "comment"]),
            "expected ColumnRequired, got: {result:?}"
        );
    }

    #[test]
    fn multi_column_csv_with_selection() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "c.csv", b"id,comment\n1,nice\n2,bad\n");
        let loaded = load_comments(&path, Some("comment")).unwrap();
        assert_eq!(loaded.column, "comment");
        assert_eq!(loaded.texts, vec!["nice", "bad"]);
    }

    #[test]
    fn unknown_column_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "c.csv", b"id,comment\n1,nice\n");
        let result = load_comments(&path, Some("body"));
        assert!(
            matches!(result, Err(IngestError::UnknownColumn { ref name, .. }) if name == "body"),
            "expected UnknownColumn, got: {result:?}"
        );
    }

    #[test]
    fn quoted_fields_survive() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(
            &dir,
            "c.csv",
            b"comment\n\"has, a comma\"\n\"has\na newline\"\n",
        );
        let loaded = load_comments(&path, None).unwrap();
        assert_eq!(loaded.texts, vec!["has, a comma", "has\na newline"]);
    }

    #[test]
    fn short_rows_yield_empty_comments() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "c.csv", b"id,comment\n1,nice\n2\n");
        let loaded = load_comments(&path, Some("comment")).unwrap();
        assert_eq!(loaded.texts, vec!["nice", ""]);
    }

    #[test]
    fn empty_csv_is_an_empty_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "c.csv", b"");
        let loaded = load_comments(&path, None).unwrap();
        assert!(loaded.texts.is_empty());
    }

    #[test]
    fn plain_text_one_comment_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "c.txt", b"first comment\nsecond comment\n");
        let loaded = load_comments(&path, None).unwrap();
        assert_eq!(loaded.column, "Text");
        assert_eq!(loaded.texts, vec!["first comment", "second comment"]);
    }

    #[test]
    fn plain_text_takes_first_tab_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "c.txt", b"keep this\tdrop this\n");
        let loaded = load_comments(&path, None).unwrap();
        assert_eq!(loaded.texts, vec!["keep this"]);
    }

    #[test]
    fn plain_text_skips_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "c.txt", b"one\n\n  \ntwo\n");
        let loaded = load_comments(&path, None).unwrap();
        assert_eq!(loaded.texts, vec!["one", "two"]);
    }

    #[test]
    fn latin1_fallback_decodes_non_utf8() {
        let dir = tempfile::tempdir().unwrap();
        // "caf\xe9" is Latin-1 for "café" and invalid UTF-8.
        let path = write_temp(&dir, "c.txt", b"caf\xe9 was great\n");
        let loaded = load_comments(&path, None).unwrap();
        assert_eq!(loaded.texts, vec!["café was great"]);
    }

    #[test]
    fn list_columns_for_csv_and_text() {
        let dir = tempfile::tempdir().unwrap();
        let csv = write_temp(&dir, "c.csv", b"id,comment\n1,nice\n");
        assert_eq!(list_columns(&csv).unwrap(), vec!["id", "comment"]);

        let txt = write_temp(&dir, "c.txt", b"whatever\n");
        assert_eq!(list_columns(&txt).unwrap(), vec!["Text"]);
    }
}
