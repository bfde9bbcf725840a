//! tally-core: domain types shared by the ingest, finance and CLI crates

pub mod finance;
pub mod money;

pub use finance::{Category, Month, ParseCategoryError, Transaction};
pub use money::{CurrencyFormat, CurrencyFormatError, DEFAULT_CURRENCY_SYMBOL, MAX_GROUPED};
