//! tally-finance: keyword category rules, the working-set ledger, report
//! aggregation and the end-to-end pipeline

pub mod category_rules;
pub mod ledger;
pub mod pipeline;
pub mod summary;

pub use category_rules::{DEFAULT_RULES, RuleTable, categorize};
pub use ledger::{CategoryFilter, Ledger};
pub use pipeline::{PipelineError, PipelineOptions, build_ledger, load_ledger, run};
pub use summary::{CategoryTotal, MonthTotal, Report, Summary, category_breakdown, monthly_trend, summarize};
