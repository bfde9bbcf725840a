//! The working set: categorized expenses plus the category filter applied
//! before aggregation.

use serde::Serialize;
use std::collections::BTreeSet;
use tally_core::{Category, Transaction};
use tally_ingest::FilterStats;

/// Categorized expenses from one statement, in file order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    stats: FilterStats,
}

impl Ledger {
    pub fn new(transactions: Vec<Transaction>, stats: FilterStats) -> Self {
        Self {
            transactions,
            stats,
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// How many input rows were read and why the others were dropped
    pub fn stats(&self) -> FilterStats {
        self.stats
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Categories that occur in the ledger, in order of first appearance.
    /// These are the choices a category filter offers.
    pub fn present_categories(&self) -> Vec<Category> {
        let mut seen = Vec::new();
        for txn in &self.transactions {
            if !seen.contains(&txn.category()) {
                seen.push(txn.category());
            }
        }
        seen
    }

    /// Transactions whose category passes `filter`, in file order.
    pub fn filtered<'a>(&'a self, filter: &'a CategoryFilter) -> impl Iterator<Item = &'a Transaction> + 'a {
        self.transactions
            .iter()
            .filter(move |t| filter.matches(t.category()))
    }
}

/// Which categories a report covers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Every category present in the ledger
    #[default]
    All,
    /// Only these categories; an empty set selects nothing
    Only(BTreeSet<Category>),
}

impl CategoryFilter {
    pub fn only(categories: impl IntoIterator<Item = Category>) -> Self {
        CategoryFilter::Only(categories.into_iter().collect())
    }

    /// Selects no category at all
    pub fn none() -> Self {
        CategoryFilter::Only(BTreeSet::new())
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(set) => set.contains(&category),
        }
    }
}
