//! Statement → categorized ledger → report.
//!
//! Every run is independent: the options and filter are passed in and
//! nothing is cached between calls.

use std::path::Path;

use tally_core::Transaction;
use tally_ingest::{
    ColumnAliases, DateOrder, IngestError, RawTable, Schema, SchemaError, normalize, read_statement,
    resolve_expenses,
};
use thiserror::Error;
use tracing::info;

use crate::category_rules::RuleTable;
use crate::ledger::{CategoryFilter, Ledger};
use crate::summary::Report;

/// Per-run settings. The defaults reproduce the built-in alias and keyword
/// tables with month-first dates.
#[derive(Debug, Clone, Default)]
pub struct PipelineOptions {
    pub aliases: ColumnAliases,
    pub rules: RuleTable,
    pub date_order: DateOrder,
}

/// Why a statement produced no report. Rows with bad dates or non-expense
/// amounts are not errors; they are dropped and counted.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A required column family is absent
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// The file could not be opened or decoded
    #[error("could not read statement: {0}")]
    Decode(#[source] IngestError),

    /// Anything else while deriving rows, e.g. text in an amount column
    #[error("error processing file: {0}")]
    Processing(#[source] IngestError),
}

/// Normalize, filter and categorize a decoded table.
pub fn build_ledger(table: &RawTable, options: &PipelineOptions) -> Result<Ledger, PipelineError> {
    let schema = Schema::resolve(&table.columns, &options.aliases)?;
    let records = normalize(table, &schema, options.date_order).map_err(PipelineError::Processing)?;
    let (expenses, stats) = resolve_expenses(records);

    let transactions: Vec<Transaction> = expenses
        .into_iter()
        .map(|e| {
            let category = options.rules.categorize(&e.narration);
            Transaction::new(e.date, e.narration, e.amount, category)
        })
        .collect();

    info!(
        narration = %schema.narration,
        date = %schema.date,
        rows = stats.rows_read,
        kept = transactions.len(),
        non_expense = stats.non_expense,
        missing_date = stats.missing_date,
        "built ledger"
    );

    Ok(Ledger::new(transactions, stats))
}

/// Decode a statement file and build its ledger.
pub fn load_ledger(path: impl AsRef<Path>, options: &PipelineOptions) -> Result<Ledger, PipelineError> {
    let table = read_statement(path).map_err(PipelineError::Decode)?;
    build_ledger(&table, options)
}

/// One full run: decode, build the ledger, aggregate under `filter`.
pub fn run(
    path: impl AsRef<Path>,
    options: &PipelineOptions,
    filter: &CategoryFilter,
) -> Result<Report, PipelineError> {
    let ledger = load_ledger(path, options)?;
    Ok(Report::build(&ledger, filter))
}
