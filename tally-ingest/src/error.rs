use std::path::PathBuf;
use thiserror::Error;

/// A required column family is absent from the statement header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("missing narration column")]
    MissingNarration,
    #[error("missing date column")]
    MissingDate,
    #[error("missing debit/credit columns")]
    MissingDebitCredit,
}

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("decoding CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("decoding spreadsheet: {0}")]
    Spreadsheet(String),

    #[error("unsupported statement format '{0}' (expected .csv or .xlsx)")]
    UnsupportedFormat(String),

    #[error("statement has no header row")]
    MissingHeader,

    #[error("unexpected value '{value}' in {column} column at row {row}")]
    InvalidAmount {
        row: usize,
        column: String,
        value: String,
    },

    #[error(transparent)]
    Pattern(#[from] regex::Error),
}
