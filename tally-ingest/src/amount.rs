//! Debit/credit cell parsing and the expense filter.

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::IngestError;
use crate::types::{ExpenseRecord, NormalizedRecord};

/// Cell texts that mean "no value", as spreadsheet exports write them.
const MISSING_MARKERS: &[&str] = &["", "-", "NA", "N/A", "n/a", "NaN", "nan", "null", "NULL", "None"];

/// Parses money cells like `1,234.50`, `₹ 500`, `-12.00` or `(75.00)`.
pub struct AmountParser {
    re: Regex,
}

impl AmountParser {
    pub fn new() -> Result<Self, IngestError> {
        let re = Regex::new(concat!(
            r"^(?P<open>\()?\s*(?P<sign>[-+])?\s*",
            r"(?:₹|\$|€|£|Rs\.?|INR)?\s*(?P<sign2>-)?\s*",
            r"(?P<number>\d[\d,]*(?:\.\d+)?|\.\d+)",
            r"\s*(?P<close>\))?$"
        ))?;
        Ok(Self { re })
    }

    /// `Ok(None)` for a blank or missing-marker cell. Anything else that is
    /// not a finite number is an error naming the row and column.
    pub fn parse(&self, raw: Option<&str>, row: usize, column: &str) -> Result<Option<f64>, IngestError> {
        let text = raw.map(str::trim).unwrap_or("");
        if MISSING_MARKERS.contains(&text) {
            return Ok(None);
        }

        let invalid = || IngestError::InvalidAmount {
            row,
            column: column.to_string(),
            value: text.to_string(),
        };

        let caps = self.re.captures(text).ok_or_else(invalid)?;
        if caps.name("open").is_some() != caps.name("close").is_some() {
            return Err(invalid());
        }

        let value: f64 = caps["number"].replace(',', "").parse().map_err(|_| invalid())?;
        // overlong numerals parse to infinity
        if !value.is_finite() {
            return Err(invalid());
        }
        let negative = caps.name("open").is_some()
            || caps.name("sign2").is_some()
            || caps.name("sign").map(|m| m.as_str()) == Some("-");

        Ok(Some(if negative { -value } else { value }))
    }
}

/// Row counts from one pass of the expense filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterStats {
    pub rows_read: usize,
    /// Net inflow or zero-value rows (refunds, salary, noise)
    pub non_expense: usize,
    /// Expense rows whose date could not be parsed
    pub missing_date: usize,
}

impl FilterStats {
    pub fn kept(&self) -> usize {
        self.rows_read - self.non_expense - self.missing_date
    }
}

/// Net outflow of a row: debit minus credit, missing sides counting as zero.
pub fn net_amount(record: &NormalizedRecord) -> f64 {
    record.debit.unwrap_or(0.0) - record.credit.unwrap_or(0.0)
}

/// Keep rows with a positive net outflow and a parsed date.
///
/// Dropped rows are counted, never reported as errors.
pub fn resolve_expenses(records: Vec<NormalizedRecord>) -> (Vec<ExpenseRecord>, FilterStats) {
    let mut stats = FilterStats {
        rows_read: records.len(),
        ..FilterStats::default()
    };
    let mut out = Vec::with_capacity(records.len());

    for record in records {
        let amount = net_amount(&record);
        if amount <= 0.0 {
            debug!(row = record.row, amount, "dropping non-expense row");
            stats.non_expense += 1;
            continue;
        }

        let Some(date) = record.date else {
            debug!(row = record.row, "dropping row with unparseable date");
            stats.missing_date += 1;
            continue;
        };

        out.push(ExpenseRecord {
            row: record.row,
            date,
            narration: record.narration,
            amount,
        });
    }

    (out, stats)
}
