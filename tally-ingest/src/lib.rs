//! tally-ingest: statement decoding (CSV/spreadsheet), column alias
//! resolution, row normalization and the expense filter.

pub mod amount;
pub mod dates;
pub mod error;
pub mod normalize;
pub mod parsers;
pub mod schema;
pub mod types;

pub use amount::{AmountParser, FilterStats, resolve_expenses};
pub use dates::{DateOrder, parse_date};
pub use error::{IngestError, SchemaError};
pub use normalize::normalize;
pub use parsers::{StatementFormat, read_statement};
pub use schema::{ColumnAliases, Field, Schema};
pub use types::{ExpenseRecord, NormalizedRecord, RawRecord, RawTable};
