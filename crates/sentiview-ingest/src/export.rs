//! Annotated CSV export.

use std::path::Path;

use sentiview_core::AnalyzedComment;

use crate::error::IngestError;

/// Write the analyzed table to `path` as CSV.
///
/// Columns are `Text`, `Cleaned_Text`, `Sentiment`, `Polarity`; serde emits
/// the header row from the field renames on [`AnalyzedComment`], so reading
/// the file back yields the same table.
///
/// # Errors
///
/// Returns [`IngestError`] if the file cannot be created or a row cannot be
/// serialized.
pub fn write_annotated_csv(path: &Path, comments: &[AnalyzedComment]) -> Result<(), IngestError> {
    let mut writer = csv::Writer::from_path(path)?;
    for comment in comments {
        writer.serialize(comment)?;
    }
    writer.flush()?;

    tracing::info!(path = %path.display(), rows = comments.len(), "wrote annotated CSV");
    Ok(())
}
