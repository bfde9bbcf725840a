//! CSV statement decoding.
//!
//! Bank exports often start with a few blank lines before the header (AMEX
//! writes six). The first non-blank record is taken as the header; later
//! blank lines are skipped.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::warn;

use super::is_blank_row;
use crate::error::IngestError;
use crate::types::RawTable;

pub fn read_csv_path(path: &Path) -> Result<RawTable, IngestError> {
    let file = File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_csv(file)
}

pub fn read_csv<R: Read>(reader: R) -> Result<RawTable, IngestError> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_reader(reader);

    let mut columns: Option<Vec<String>> = None;
    let mut rows = Vec::new();

    for result in rdr.records() {
        let record = result?;
        if is_blank_row(record.iter()) {
            continue;
        }

        let Some(header_len) = columns.as_ref().map(Vec::len) else {
            columns = Some(
                record
                    .iter()
                    .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
                    .collect(),
            );
            continue;
        };

        if record.len() > header_len {
            warn!(
                line = record.position().map(|p| p.line()),
                cells = record.len(),
                columns = header_len,
                "ignoring cells beyond the header"
            );
        }
        rows.push(record.iter().map(str::to_string).collect::<Vec<_>>());
    }

    let columns = columns.ok_or(IngestError::MissingHeader)?;
    Ok(RawTable::from_rows(columns, rows))
}
