use std::collections::BTreeSet;
use std::path::PathBuf;

use tally_core::Category;
use tally_finance::{CategoryFilter, PipelineOptions, Report, build_ledger, load_ledger, run};
use tally_ingest::{DateOrder, RawTable};

fn statement_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("fixtures")
        .join("statement.csv")
}

fn day_first() -> PipelineOptions {
    PipelineOptions {
        date_order: DateOrder::DayFirst,
        ..PipelineOptions::default()
    }
}

/// Real-data regression: the sample statement yields the expected working set.
#[test]
fn test_working_set_from_statement() {
    let ledger = load_ledger(statement_path(), &day_first()).unwrap();
    let stats = ledger.stats();

    assert_eq!(stats.rows_read, 18);
    assert_eq!(stats.non_expense, 4, "salary x2, refund, zero-net reversal");
    assert_eq!(stats.missing_date, 1, "the 'Pending' row");
    assert_eq!(ledger.len(), 13);
    assert!(ledger.transactions().iter().all(|t| t.amount() > 0.0));
}

#[test]
fn test_full_report_from_statement() {
    let report = run(statement_path(), &day_first(), &CategoryFilter::All).unwrap();

    assert_eq!(report.summary.count, 13);
    assert_eq!(report.summary.total, 66528.5);
    let mean = report.summary.mean.unwrap();
    assert!((mean - 66528.5 / 13.0).abs() < 1e-9);

    let trend: Vec<(String, f64)> = report
        .monthly_trend
        .iter()
        .map(|m| (m.month.to_string(), m.total))
        .collect();
    assert_eq!(
        trend,
        vec![("2024-02".to_string(), 29969.5), ("2024-03".to_string(), 36559.0)]
    );

    let breakdown: Vec<(Category, f64)> = report
        .category_breakdown
        .iter()
        .map(|r| (r.category, r.total))
        .collect();
    assert_eq!(
        breakdown,
        vec![
            (Category::Rent, 50000.0),
            (Category::Groceries, 5455.75),
            (Category::Miscellaneous, 5000.0),
            (Category::Shopping, 1999.0),
            (Category::Utilities, 1210.0),
            (Category::EatingOut, 835.0),
            (Category::Entertainment, 649.0),
            (Category::Healthcare, 560.75),
            (Category::Education, 499.0),
            (Category::Transport, 320.0),
        ]
    );

    let newest = &report.transactions[0];
    assert_eq!(newest.narration(), "FLIPKART INTERNET");
    assert_eq!(report.transactions.last().unwrap().narration(), "UPI-BIGBASKET-ORDER 5521");
}

#[test]
fn test_breakdown_sums_to_total() {
    let report = run(statement_path(), &day_first(), &CategoryFilter::All).unwrap();
    let sum: f64 = report.category_breakdown.iter().map(|r| r.total).sum();
    assert_eq!(sum, report.summary.total);
}

#[test]
fn test_category_filter_on_statement() {
    let ledger = load_ledger(statement_path(), &day_first()).unwrap();
    let filter = CategoryFilter::only([Category::Rent, Category::EatingOut]);
    let report = Report::build(&ledger, &filter);

    assert_eq!(report.summary.count, 4);
    assert_eq!(report.summary.total, 50835.0);
    let cats: BTreeSet<Category> = report.transactions.iter().map(|t| t.category()).collect();
    assert_eq!(cats, BTreeSet::from([Category::Rent, Category::EatingOut]));
    assert_eq!(report.available_categories.len(), 10);

    let none = Report::build(&ledger, &CategoryFilter::none());
    assert_eq!(none.summary.total, 0.0);
    assert_eq!(none.summary.mean, None);
    assert_eq!(none.summary.count, 0);
    assert!(none.monthly_trend.is_empty());
    assert!(none.category_breakdown.is_empty());
}

#[test]
fn test_rerun_is_identical() {
    let a = run(statement_path(), &day_first(), &CategoryFilter::All).unwrap();
    let b = run(statement_path(), &day_first(), &CategoryFilter::All).unwrap();
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn test_breakdown_sums_to_total_with_decimal_amounts() {
    let table = RawTable::from_rows(
        vec!["Date".into(), "Narration".into(), "Debit".into()],
        vec![
            vec!["2024-03-01", "Uber trip", "0.1"],
            vec!["2024-03-02", "Zomato order", "0.2"],
            vec!["2024-03-03", "Uber trip", "0.3"],
            vec!["2024-03-04", "Zomato order", "0.7"],
            vec!["2024-03-05", "Netflix", "0.11"],
        ],
    );
    let ledger = build_ledger(&table, &PipelineOptions::default()).unwrap();
    let report = Report::build(&ledger, &CategoryFilter::All);

    let sum: f64 = report.category_breakdown.iter().map(|r| r.total).sum();
    assert_eq!(sum.to_bits(), report.summary.total.to_bits());
    assert_eq!(report.summary.count, 5);
}

#[test]
fn test_in_memory_table() {
    let table = RawTable::from_rows(
        vec!["Date".into(), "Narration".into(), "Debit".into(), "Credit".into()],
        vec![
            vec!["2024-03-05", "Zomato order", "500", "0"],
            vec!["2024-03-01", "Salary credited", "0", "1000"],
            vec!["2024-03-09", "random shop xyz", "75", ""],
            vec!["not-a-date", "Uber", "120", ""],
        ],
    );
    let ledger = build_ledger(&table, &PipelineOptions::default()).unwrap();
    let cats: Vec<Category> = ledger.transactions().iter().map(|t| t.category()).collect();
    assert_eq!(cats, vec![Category::EatingOut, Category::Miscellaneous]);
}
