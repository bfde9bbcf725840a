//! Finance record types for categorized expense transactions

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Spending categories, declared in rule-priority order.
///
/// The derived `Ord` follows declaration order, which is also the order the
/// keyword rules are tried in and the tie-break order for category totals.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    #[serde(rename = "Groceries")]
    Groceries,
    #[serde(rename = "Eating Out")]
    EatingOut,
    #[serde(rename = "Entertainment")]
    Entertainment,
    #[serde(rename = "Utilities")]
    Utilities,
    #[serde(rename = "Transport")]
    Transport,
    #[serde(rename = "Shopping")]
    Shopping,
    #[serde(rename = "Healthcare")]
    Healthcare,
    #[serde(rename = "Education")]
    Education,
    #[serde(rename = "Salary")]
    Salary,
    #[serde(rename = "Rent")]
    Rent,
    #[serde(rename = "Miscellaneous")]
    Miscellaneous,
}

impl Category {
    pub const COUNT: usize = 11;

    /// Every category in canonical order.
    pub const ALL: [Category; Category::COUNT] = [
        Category::Groceries,
        Category::EatingOut,
        Category::Entertainment,
        Category::Utilities,
        Category::Transport,
        Category::Shopping,
        Category::Healthcare,
        Category::Education,
        Category::Salary,
        Category::Rent,
        Category::Miscellaneous,
    ];

    /// Display name, as shown in reports and accepted in config files
    pub fn name(&self) -> &'static str {
        match self {
            Category::Groceries => "Groceries",
            Category::EatingOut => "Eating Out",
            Category::Entertainment => "Entertainment",
            Category::Utilities => "Utilities",
            Category::Transport => "Transport",
            Category::Shopping => "Shopping",
            Category::Healthcare => "Healthcare",
            Category::Education => "Education",
            Category::Salary => "Salary",
            Category::Rent => "Rent",
            Category::Miscellaneous => "Miscellaneous",
        }
    }

    /// Kebab-case form, convenient on the command line (`eating-out`)
    pub fn slug(&self) -> String {
        self.name().to_lowercase().replace(' ', "-")
    }

    /// Zero-based position in canonical order
    pub fn position(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category '{0}'")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    /// Accepts the display name or the slug, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(['-', '_'], " ");
        Category::ALL
            .into_iter()
            .find(|c| c.name().to_lowercase() == wanted)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// Calendar-month bucket. Orders chronologically and renders as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    pub fn year(&self) -> i32 {
        self.year
    }

    /// 1-based calendar month
    pub fn month(&self) -> u32 {
        self.month
    }
}

impl From<NaiveDate> for Month {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for Month {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A categorized expense.
///
/// Built once by the pipeline and never modified: the month is derived from
/// the date at construction and the category is fixed.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Transaction {
    date: NaiveDate,
    narration: String,
    /// Net outflow (debit minus credit), always positive
    amount: f64,
    category: Category,
    month: Month,
}

impl Transaction {
    pub fn new(
        date: NaiveDate,
        narration: impl Into<String>,
        amount: f64,
        category: Category,
    ) -> Self {
        Self {
            date,
            narration: narration.into(),
            amount,
            category,
            month: Month::from(date),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn narration(&self) -> &str {
        &self.narration
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }
}
