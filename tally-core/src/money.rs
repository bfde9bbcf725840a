//! Currency rendering for report amounts: symbol prefix, thousands
//! separators and exactly two decimal places.

use numfmt::{Formatter, Precision};
use thiserror::Error;

pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// Largest magnitude rendered with grouping and exact cents.
pub const MAX_GROUPED: f64 = 1e15;

const NUMFMT_LIMIT: u64 = 1_000_000_000_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid currency symbol '{0}'")]
pub struct CurrencyFormatError(pub String);

/// Formats amounts as e.g. `₹1,234.50`.
pub struct CurrencyFormat {
    symbol: String,
    whole: Formatter,
}

impl CurrencyFormat {
    pub fn new(symbol: &str) -> Result<Self, CurrencyFormatError> {
        // Only whole units go through numfmt; it drops trailing zeros from
        // fractions, so cents are appended separately.
        let whole = Formatter::currency(symbol)
            .map_err(|_| CurrencyFormatError(symbol.to_string()))?
            .precision(Precision::Decimals(0));

        Ok(Self {
            symbol: symbol.to_string(),
            whole,
        })
    }

    /// Amounts at or beyond `MAX_GROUPED` (and non-finite values) are written
    /// as plain decimals without separators; f64 no longer resolves cents there.
    pub fn format(&self, amount: f64) -> String {
        let sign = if amount.is_sign_negative() { "-" } else { "" };
        if !amount.is_finite() || amount.abs() >= MAX_GROUPED {
            return format!("{sign}{}{:.2}", self.symbol, amount.abs());
        }

        let cents = (amount.abs() * 100.0).round() as u64;
        let units = cents / 100;
        let fraction = cents % 100;

        // numfmt renders zero as a bare "0"
        let grouped = if units == 0 {
            format!("{}0", self.symbol)
        } else {
            self.group(units)
        };

        let sign = if cents > 0 { sign } else { "" };
        format!("{sign}{grouped}.{fraction:02}")
    }

    /// numfmt switches to scientific notation from a trillion up, so larger
    /// values get their low thousands groups appended here.
    fn group(&self, units: u64) -> String {
        if units < NUMFMT_LIMIT {
            self.whole.fmt_string(units as f64)
        } else {
            format!("{},{:03}", self.group(units / 1000), units % 1000)
        }
    }
}
