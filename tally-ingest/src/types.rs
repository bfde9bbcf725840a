use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One decoded statement row: column name to cell text, schema unknown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    cells: BTreeMap<String, String>,
}

impl RawRecord {
    /// Cell text for `column`, or `None` when the row has no such cell.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RawRecord
where
    K: Into<String>,
    V: Into<String>,
{
    /// The first value wins when a column name repeats.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut cells = BTreeMap::new();
        for (k, v) in iter {
            cells.entry(k.into()).or_insert_with(|| v.into());
        }
        Self { cells }
    }
}

/// A decoded statement: header columns in file order plus the data rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTable {
    pub columns: Vec<String>,
    pub records: Vec<RawRecord>,
}

impl RawTable {
    /// Build a table from a header and positional rows. Short rows leave
    /// trailing columns absent; cells beyond the header are ignored.
    pub fn from_rows<R, C>(columns: Vec<String>, rows: R) -> Self
    where
        R: IntoIterator<Item = Vec<C>>,
        C: Into<String>,
    {
        let records = rows
            .into_iter()
            .map(|row| {
                columns
                    .iter()
                    .zip(row)
                    .map(|(col, cell)| (col.clone(), cell.into()))
                    .collect()
            })
            .collect();

        Self { columns, records }
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// A row mapped onto the canonical schema, before expense filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    /// 1-based data row number in the source table
    pub row: usize,
    /// `None` when the cell was blank or not a recognizable date
    pub date: Option<NaiveDate>,
    pub narration: String,
    pub debit: Option<f64>,
    pub credit: Option<f64>,
}

/// A row that survived the expense filter: dated, with a positive net outflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub row: usize,
    pub date: NaiveDate,
    pub narration: String,
    pub amount: f64,
}
