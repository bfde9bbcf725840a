//! Column alias resolution.
//!
//! Statements name the same field differently (`Narration` vs `Description`,
//! `Date` vs `Txn Date`). Each canonical field has an ordered alias list and
//! the first alias present in the header wins. Matching is exact and
//! case-sensitive; candidate columns are never merged.

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

/// Canonical statement fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Narration,
    Date,
    Debit,
    Credit,
}

impl Field {
    /// The error reported when no alias for this field is present.
    /// Debit and credit form one family.
    pub fn missing(&self) -> SchemaError {
        match self {
            Field::Narration => SchemaError::MissingNarration,
            Field::Date => SchemaError::MissingDate,
            Field::Debit | Field::Credit => SchemaError::MissingDebitCredit,
        }
    }
}

/// Ordered alias lists per canonical field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnAliases {
    pub narration: Vec<String>,
    pub date: Vec<String>,
    pub debit: Vec<String>,
    pub credit: Vec<String>,
}

impl Default for ColumnAliases {
    fn default() -> Self {
        fn names(list: &[&str]) -> Vec<String> {
            list.iter().map(|s| s.to_string()).collect()
        }

        Self {
            narration: names(&["Narration", "Description"]),
            date: names(&["Date", "Txn Date", "Value Date"]),
            debit: names(&["Debit"]),
            credit: names(&["Credit"]),
        }
    }
}

impl ColumnAliases {
    pub fn for_field(&self, field: Field) -> &[String] {
        match field {
            Field::Narration => &self.narration,
            Field::Date => &self.date,
            Field::Debit => &self.debit,
            Field::Credit => &self.credit,
        }
    }

    /// Append extra aliases after the existing ones, so they only apply
    /// when none of the earlier names is present. Duplicates are skipped.
    pub fn extend<I, S>(&mut self, field: Field, extra: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let list = match field {
            Field::Narration => &mut self.narration,
            Field::Date => &mut self.date,
            Field::Debit => &mut self.debit,
            Field::Credit => &mut self.credit,
        };
        for alias in extra {
            let alias = alias.into();
            if !list.contains(&alias) {
                list.push(alias);
            }
        }
    }
}

/// First alias, in priority order, that names one of `columns`.
pub fn resolve(columns: &[String], aliases: &[String]) -> Option<String> {
    aliases
        .iter()
        .find(|alias| columns.iter().any(|c| c == *alias))
        .cloned()
}

/// Resolve one canonical field, failing with that field's schema error.
pub fn resolve_field(
    columns: &[String],
    field: Field,
    aliases: &ColumnAliases,
) -> Result<String, SchemaError> {
    resolve(columns, aliases.for_field(field)).ok_or(field.missing())
}

/// Source column chosen for each canonical field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    pub narration: String,
    pub date: String,
    pub debit: Option<String>,
    pub credit: Option<String>,
}

impl Schema {
    /// Resolve the whole schema. Families are checked in the order
    /// narration, date, debit/credit and the first missing one is reported.
    /// Either of debit or credit satisfies its family; the other is then
    /// treated as zero on every row.
    pub fn resolve(columns: &[String], aliases: &ColumnAliases) -> Result<Self, SchemaError> {
        let narration = resolve_field(columns, Field::Narration, aliases)?;
        let date = resolve_field(columns, Field::Date, aliases)?;
        let debit = resolve(columns, aliases.for_field(Field::Debit));
        let credit = resolve(columns, aliases.for_field(Field::Credit));

        if debit.is_none() && credit.is_none() {
            return Err(SchemaError::MissingDebitCredit);
        }

        Ok(Self {
            narration,
            date,
            debit,
            credit,
        })
    }
}
