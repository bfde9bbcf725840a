//! Spreadsheet statement decoding (xlsx, xls, ods) via calamine.
//!
//! Only the first worksheet is read. Cells are rendered to text so the
//! normalizer treats spreadsheet and CSV input the same way: date cells
//! become ISO dates, numbers keep their shortest decimal form.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use chrono::{Duration, NaiveDate};

use super::is_blank_row;
use crate::error::IngestError;
use crate::types::RawTable;

pub fn read_spreadsheet_path(path: &Path) -> Result<RawTable, IngestError> {
    let mut workbook =
        open_workbook_auto(path).map_err(|e| IngestError::Spreadsheet(format!("{}: {e}", path.display())))?;

    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(IngestError::MissingHeader)?;

    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|e| IngestError::Spreadsheet(format!("sheet '{sheet}': {e}")))?;

    let mut rows = range
        .rows()
        .map(|row| row.iter().map(cell_text).collect::<Vec<String>>())
        .filter(|cells| !is_blank_row(cells.iter().map(String::as_str)));

    let columns: Vec<String> = rows
        .next()
        .ok_or(IngestError::MissingHeader)?
        .into_iter()
        .map(|h| h.trim().to_string())
        .collect();

    Ok(RawTable::from_rows(columns, rows))
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => excel_serial_to_date(dt.as_f64())
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
        // Empty and error cells
        _ => String::new(),
    }
}

/// Excel serial day numbers count from 1899-12-30 (absorbing the 1900 leap
/// year bug). The fractional part is the time of day and is dropped.
fn excel_serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() {
        return None;
    }
    let base = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    base.checked_add_signed(Duration::days(serial.floor() as i64))
}
