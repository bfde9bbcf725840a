//! Maps raw statement rows onto the canonical schema.

use tracing::debug;

use crate::amount::AmountParser;
use crate::dates::{DateOrder, parse_date};
use crate::error::IngestError;
use crate::schema::Schema;
use crate::types::{NormalizedRecord, RawTable};

/// Convert every row of `table` using the resolved `schema`.
///
/// Unparseable dates become `None` and are filtered later. A debit or
/// credit cell that is not a number fails the whole table.
pub fn normalize(
    table: &RawTable,
    schema: &Schema,
    date_order: DateOrder,
) -> Result<Vec<NormalizedRecord>, IngestError> {
    let amounts = AmountParser::new()?;
    let mut out = Vec::with_capacity(table.len());

    for (i, record) in table.records.iter().enumerate() {
        let row = i + 1;

        let raw_date = record.get(&schema.date).unwrap_or("");
        let date = parse_date(raw_date, date_order);
        if date.is_none() && !raw_date.trim().is_empty() {
            debug!(row, value = raw_date, "unrecognized date");
        }

        let debit = match &schema.debit {
            Some(col) => amounts.parse(record.get(col), row, col)?,
            None => None,
        };
        let credit = match &schema.credit {
            Some(col) => amounts.parse(record.get(col), row, col)?,
            None => None,
        };

        out.push(NormalizedRecord {
            row,
            date,
            narration: record.get(&schema.narration).unwrap_or("").to_string(),
            debit,
            credit,
        });
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ColumnAliases;
    use chrono::NaiveDate;

    fn table(header: &[&str], rows: &[&[&str]]) -> RawTable {
        RawTable::from_rows(
            header.iter().map(|s| s.to_string()).collect(),
            rows.iter().map(|r| r.to_vec()),
        )
    }

    #[test]
    fn test_normalize_with_aliases() {
        let t = table(
            &["Txn Date", "Description", "Debit", "Credit"],
            &[
                &["2024-03-05", "Zomato order", "500", ""],
                &["garbage", "Uber trip", "120.50", "0"],
            ],
        );
        let schema = Schema::resolve(&t.columns, &ColumnAliases::default()).unwrap();
        let rows = normalize(&t, &schema, DateOrder::MonthFirst).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].date, NaiveDate::from_ymd_opt(2024, 3, 5));
        assert_eq!(rows[0].narration, "Zomato order");
        assert_eq!(rows[0].debit, Some(500.0));
        assert_eq!(rows[0].credit, None);
        assert_eq!(rows[1].date, None);
        assert_eq!(rows[1].debit, Some(120.5));
        assert_eq!(rows[1].row, 2);
    }

    #[test]
    fn test_short_rows_leave_cells_missing() {
        let t = table(&["Date", "Narration", "Debit", "Credit"], &[&["2024-03-05", "Metro card"]]);
        let schema = Schema::resolve(&t.columns, &ColumnAliases::default()).unwrap();
        let rows = normalize(&t, &schema, DateOrder::MonthFirst).unwrap();
        assert_eq!(rows[0].debit, None);
        assert_eq!(rows[0].credit, None);
    }

    #[test]
    fn test_bad_amount_fails_table() {
        let t = table(
            &["Date", "Narration", "Debit", "Credit"],
            &[&["2024-03-05", "ok", "10", ""], &["2024-03-06", "bad", "ten", ""]],
        );
        let schema = Schema::resolve(&t.columns, &ColumnAliases::default()).unwrap();
        let err = normalize(&t, &schema, DateOrder::MonthFirst).unwrap_err();
        assert!(matches!(err, IngestError::InvalidAmount { row: 2, .. }));
    }
}
