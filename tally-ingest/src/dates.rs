//! Lenient calendar-date parsing for statement cells.
//!
//! Unrecognized text yields `None`; the row is later dropped from the
//! working set rather than failing the whole statement.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How to read ambiguous numeric dates such as `05/03/2024`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateOrder {
    /// `05/03/2024` is May 3rd
    #[default]
    MonthFirst,
    /// `05/03/2024` is March 5th
    DayFirst,
}

impl DateOrder {
    pub fn from_day_first(day_first: bool) -> Self {
        if day_first {
            DateOrder::DayFirst
        } else {
            DateOrder::MonthFirst
        }
    }
}

// Two-digit year forms come first: chrono's %Y would read "24" as year 24.
const NAMED_MONTH_FORMATS: &[&str] = &[
    "%d-%b-%y",
    "%d %b %y",
    "%d-%b-%Y",
    "%d %b %Y",
    "%d-%B-%Y",
    "%d %B %Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%b %d %Y",
];

/// Parse a statement date cell.
///
/// Accepts `YYYY-MM-DD` (also with `/` or `.`, optionally followed by a time),
/// numeric dates with the year last (two or four digits) and month-name forms
/// like `05-Mar-2024` or `Mar 5, 2024`. Numeric dates follow `order`, except
/// that a first component above 12 can only be a day (and vice versa).
pub fn parse_date(raw: &str, order: DateOrder) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    // Drop a trailing time component ("2024-03-05 10:22:00", "2024-03-05T10:22")
    let date_part = s
        .split(|c: char| c == 'T' || c.is_whitespace())
        .next()
        .unwrap_or(s);

    if let Some(d) = parse_numeric(date_part, order) {
        return Some(d);
    }

    NAMED_MONTH_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

fn parse_numeric(s: &str, order: DateOrder) -> Option<NaiveDate> {
    let parts: Vec<&str> = s.split(['-', '/', '.']).collect();
    let all_digits = |p: &&str| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit());
    if parts.len() != 3 || !parts.iter().all(all_digits) {
        return None;
    }

    if parts[0].len() == 4 {
        let y: i32 = parts[0].parse().ok()?;
        let m: u32 = parts[1].parse().ok()?;
        let d: u32 = parts[2].parse().ok()?;
        return NaiveDate::from_ymd_opt(y, m, d);
    }

    let a: u32 = parts[0].parse().ok()?;
    let b: u32 = parts[1].parse().ok()?;
    let year = match parts[2].len() {
        4 => parts[2].parse().ok()?,
        2 => expand_two_digit_year(parts[2].parse().ok()?),
        _ => return None,
    };

    let (month, day) = match order {
        DateOrder::MonthFirst if a > 12 => (b, a),
        DateOrder::MonthFirst => (a, b),
        DateOrder::DayFirst if b > 12 => (a, b),
        DateOrder::DayFirst => (b, a),
    };

    NaiveDate::from_ymd_opt(year, month, day)
}

/// 00-68 map to 2000-2068, 69-99 to 1969-1999.
fn expand_two_digit_year(yy: i32) -> i32 {
    if yy < 69 { 2000 + yy } else { 1900 + yy }
}
