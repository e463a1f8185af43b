use thiserror::Error;

#[derive(Error, Debug)]
pub enum PayloadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("column '{column}' not found in header: {available}")]
    ColumnNotFound { column: String, available: String },

    #[error("column index {index} out of range for header with {width} columns")]
    ColumnIndexOutOfRange { index: usize, width: usize },

    #[error("record {record} has {width} fields, column {column} requested")]
    RowTooShort {
        record: u64,
        width: usize,
        column: usize,
    },
}

pub type Result<T> = std::result::Result<T, PayloadError>;
