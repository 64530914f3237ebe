//! File boundary for sentiview.
//!
//! Loads comment tables from CSV or plain-text files (with Latin-1 fallback
//! for non-UTF-8 input) and writes the annotated table back out as CSV.

pub mod error;
pub mod export;
pub mod loader;

pub use error::IngestError;
pub use export::write_annotated_csv;
pub use loader::{list_columns, load_comments, read_file_lossy, LoadedComments, SourceFormat};
