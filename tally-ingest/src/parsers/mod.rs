//! Statement file decoders. Each turns a file into a [`RawTable`] without
//! interpreting any column.

pub mod csv_table;
#[cfg(feature = "xlsx")]
pub mod xlsx_table;

use std::path::Path;

use crate::error::IngestError;
use crate::types::RawTable;

/// Supported statement file formats, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementFormat {
    Csv,
    Spreadsheet,
}

impl StatementFormat {
    pub fn from_path(path: &Path) -> Result<Self, IngestError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "csv" => Ok(StatementFormat::Csv),
            "xlsx" | "xlsm" | "xls" | "ods" if cfg!(feature = "xlsx") => Ok(StatementFormat::Spreadsheet),
            _ => Err(IngestError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Decode a statement file into a raw table.
pub fn read_statement(path: impl AsRef<Path>) -> Result<RawTable, IngestError> {
    let path = path.as_ref();
    match StatementFormat::from_path(path)? {
        StatementFormat::Csv => csv_table::read_csv_path(path),
        #[cfg(feature = "xlsx")]
        StatementFormat::Spreadsheet => xlsx_table::read_spreadsheet_path(path),
        #[cfg(not(feature = "xlsx"))]
        StatementFormat::Spreadsheet => Err(IngestError::UnsupportedFormat(path.display().to_string())),
    }
}

/// Shared by the decoders: a row with no non-blank cell.
pub(crate) fn is_blank_row<'a>(cells: impl IntoIterator<Item = &'a str>) -> bool {
    cells.into_iter().all(|c| c.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(StatementFormat::from_path(Path::new("s.csv")).unwrap(), StatementFormat::Csv);
        assert_eq!(StatementFormat::from_path(Path::new("S.CSV")).unwrap(), StatementFormat::Csv);
        assert!(matches!(
            StatementFormat::from_path(Path::new("statement.pdf")),
            Err(IngestError::UnsupportedFormat(_))
        ));
        assert!(StatementFormat::from_path(Path::new("statement")).is_err());
    }

    #[cfg(feature = "xlsx")]
    #[test]
    fn test_spreadsheet_extensions() {
        assert_eq!(
            StatementFormat::from_path(Path::new("march.xlsx")).unwrap(),
            StatementFormat::Spreadsheet
        );
    }
}
