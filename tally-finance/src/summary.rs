//! Aggregation of the filtered working set into report tables: summary
//! metrics, monthly trend and category breakdown.

use serde::Serialize;
use std::collections::BTreeMap;
use tally_core::{Category, Month, Transaction};
use tally_ingest::FilterStats;

use crate::ledger::{CategoryFilter, Ledger};

/// Headline metrics of a set of transactions
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Summary {
    pub total: f64,
    /// `None` when there are no transactions
    pub mean: Option<f64>,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthTotal {
    pub month: Month,
    pub total: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: f64,
    pub count: usize,
    /// Percentage of the overall total, 0-100
    pub share: f64,
}

/// The total is the sum of the category totals in breakdown order, so a
/// breakdown of the same transactions adds up to it bit for bit.
pub fn summarize<'a>(txns: impl IntoIterator<Item = &'a Transaction>) -> Summary {
    summary_of(&category_breakdown(txns))
}

fn summary_of(breakdown: &[CategoryTotal]) -> Summary {
    let total: f64 = breakdown.iter().map(|r| r.total).sum();
    let count: usize = breakdown.iter().map(|r| r.count).sum();

    Summary {
        total,
        mean: (count > 0).then(|| total / count as f64),
        count,
    }
}

/// Totals per calendar month, oldest first.
pub fn monthly_trend<'a>(txns: impl IntoIterator<Item = &'a Transaction>) -> Vec<MonthTotal> {
    let mut by_month: BTreeMap<Month, f64> = BTreeMap::new();
    for t in txns {
        *by_month.entry(t.month()).or_insert(0.0) += t.amount();
    }

    by_month
        .into_iter()
        .map(|(month, total)| MonthTotal { month, total })
        .collect()
}

/// Totals per category, largest first. Equal totals keep canonical
/// category order.
pub fn category_breakdown<'a>(txns: impl IntoIterator<Item = &'a Transaction>) -> Vec<CategoryTotal> {
    let mut totals = [0.0_f64; Category::COUNT];
    let mut counts = [0_usize; Category::COUNT];
    for t in txns {
        let i = t.category().position();
        totals[i] += t.amount();
        counts[i] += 1;
    }
    let overall: f64 = totals.iter().sum();

    let mut rows: Vec<CategoryTotal> = Category::ALL
        .into_iter()
        .filter(|c| counts[c.position()] > 0)
        .map(|category| {
            let total = totals[category.position()];
            CategoryTotal {
                category,
                total,
                count: counts[category.position()],
                share: if overall > 0.0 { total / overall * 100.0 } else { 0.0 },
            }
        })
        .collect();

    // sort_by is stable, so ties stay in canonical order
    rows.sort_by(|a, b| b.total.total_cmp(&a.total));
    rows
}

/// Everything a presentation layer needs for one statement and filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub summary: Summary,
    pub monthly_trend: Vec<MonthTotal>,
    pub category_breakdown: Vec<CategoryTotal>,
    /// Filtered transactions, newest first
    pub transactions: Vec<Transaction>,
    /// Categories present in the whole ledger, for the filter's choices
    pub available_categories: Vec<Category>,
    pub stats: FilterStats,
}

impl Report {
    pub fn build(ledger: &Ledger, filter: &CategoryFilter) -> Self {
        let selected: Vec<&Transaction> = ledger.filtered(filter).collect();

        let mut transactions: Vec<Transaction> = selected.iter().map(|t| (*t).clone()).collect();
        transactions.sort_by(|a, b| b.date().cmp(&a.date()));

        let category_breakdown = category_breakdown(selected.iter().copied());

        Self {
            summary: summary_of(&category_breakdown),
            monthly_trend: monthly_trend(selected.iter().copied()),
            category_breakdown,
            transactions,
            available_categories: ledger.present_categories(),
            stats: ledger.stats(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn txn(y: i32, m: u32, d: u32, amount: f64, category: Category) -> Transaction {
        let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        Transaction::new(date, format!("{category} {d}"), amount, category)
    }

    fn ledger() -> Ledger {
        Ledger::new(
            vec![
                txn(2024, 3, 5, 500.0, Category::EatingOut),
                txn(2024, 2, 10, 1200.0, Category::Rent),
                txn(2024, 3, 8, 250.5, Category::Transport),
                txn(2023, 12, 24, 99.5, Category::EatingOut),
                txn(2024, 2, 11, 400.0, Category::Groceries),
            ],
            FilterStats::default(),
        )
    }

    #[test]
    fn test_summary_metrics() {
        let s = summarize(ledger().transactions());
        assert_eq!(s.total, 2450.0);
        assert_eq!(s.count, 5);
        assert_eq!(s.mean, Some(490.0));
    }

    #[test]
    fn test_monthly_trend_chronological() {
        let trend = monthly_trend(ledger().transactions());
        let labels: Vec<String> = trend.iter().map(|m| m.month.to_string()).collect();
        assert_eq!(labels, vec!["2023-12", "2024-02", "2024-03"]);
        assert_eq!(trend[1].total, 1600.0);
        assert_eq!(trend[2].total, 750.5);
    }

    #[test]
    fn test_breakdown_descending() {
        let rows = category_breakdown(ledger().transactions());
        let order: Vec<Category> = rows.iter().map(|r| r.category).collect();
        assert_eq!(
            order,
            vec![
                Category::Rent,
                Category::EatingOut,
                Category::Groceries,
                Category::Transport
            ]
        );
        assert_eq!(rows[1].total, 599.5);
        assert_eq!(rows[1].count, 2);
    }

    #[test]
    fn test_breakdown_ties_follow_canonical_order() {
        let txns = vec![
            txn(2024, 1, 1, 100.0, Category::Rent),
            txn(2024, 1, 2, 100.0, Category::Shopping),
            txn(2024, 1, 3, 100.0, Category::Groceries),
        ];
        let order: Vec<Category> = category_breakdown(&txns).iter().map(|r| r.category).collect();
        assert_eq!(order, vec![Category::Groceries, Category::Shopping, Category::Rent]);
    }

    #[test]
    fn test_breakdown_conserves_total() {
        let l = ledger();
        let total: f64 = category_breakdown(l.transactions()).iter().map(|r| r.total).sum();
        assert_eq!(total, summarize(l.transactions()).total);

        let shares: f64 = category_breakdown(l.transactions()).iter().map(|r| r.share).sum();
        assert!((shares - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_breakdown_conserves_inexact_decimals() {
        let txns = vec![
            txn(2024, 1, 1, 0.1, Category::Transport),
            txn(2024, 1, 2, 0.2, Category::EatingOut),
            txn(2024, 1, 3, 0.3, Category::Transport),
            txn(2024, 1, 4, 0.7, Category::EatingOut),
            txn(2024, 1, 5, 0.11, Category::Entertainment),
        ];
        let ledger = Ledger::new(txns, FilterStats::default());
        let report = Report::build(&ledger, &CategoryFilter::All);

        let sum: f64 = report.category_breakdown.iter().map(|r| r.total).sum();
        assert_eq!(sum.to_bits(), report.summary.total.to_bits());
        assert_eq!(summarize(ledger.transactions()), report.summary);
        assert_eq!(report.summary.count, 5);
        assert!((report.summary.total - 1.41).abs() < 1e-12);
    }

    #[test]
    fn test_report_sorted_newest_first() {
        let report = Report::build(&ledger(), &CategoryFilter::All);
        let dates: Vec<NaiveDate> = report.transactions.iter().map(|t| t.date()).collect();
        let mut sorted = dates.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(dates, sorted);
        assert_eq!(report.transactions.len(), 5);
    }

    #[test]
    fn test_report_respects_filter() {
        let report = Report::build(&ledger(), &CategoryFilter::only([Category::EatingOut]));
        assert_eq!(report.summary.total, 599.5);
        assert_eq!(report.summary.count, 2);
        assert_eq!(report.category_breakdown.len(), 1);
        assert_eq!(report.category_breakdown[0].share, 100.0);
        // filter choices still list everything present
        assert_eq!(report.available_categories.len(), 4);
    }

    #[test]
    fn test_empty_filter_yields_empty_report() {
        let report = Report::build(&ledger(), &CategoryFilter::none());
        assert_eq!(
            report.summary,
            Summary {
                total: 0.0,
                mean: None,
                count: 0
            }
        );
        assert!(report.monthly_trend.is_empty());
        assert!(report.category_breakdown.is_empty());
        assert!(report.transactions.is_empty());
    }

    #[test]
    fn test_report_is_deterministic() {
        let a = serde_json::to_string(&Report::build(&ledger(), &CategoryFilter::All)).unwrap();
        let b = serde_json::to_string(&Report::build(&ledger(), &CategoryFilter::All)).unwrap();
        assert_eq!(a, b);
    }
}
