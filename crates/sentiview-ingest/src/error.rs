use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("several columns found; select one of: {}", .available.join(", "))]
    ColumnRequired { available: Vec<String> },

    #[error("column '{name}' not found; available: {}", .available.join(", "))]
    UnknownColumn {
        name: String,
        available: Vec<String>,
    },
}
