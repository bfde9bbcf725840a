//! Plain-text rendering of a report for the terminal.

use std::io::{self, Write};

use tally_core::{Category, CurrencyFormat};
use tally_finance::{Report, RuleTable};

pub fn write_report(
    out: &mut impl Write,
    report: &Report,
    money: &CurrencyFormat,
    limit: Option<usize>,
) -> io::Result<()> {
    let s = &report.summary;
    writeln!(out, "Summary")?;
    writeln!(out, "  Total spend              {}", money.format(s.total))?;
    writeln!(
        out,
        "  Average per transaction  {}",
        s.mean.map(|m| money.format(m)).unwrap_or_else(|| "n/a".to_string())
    )?;
    writeln!(out, "  Transactions             {}", s.count)?;

    let stats = report.stats;
    writeln!(
        out,
        "  ({} rows read, {} not expenses, {} without a valid date)",
        stats.rows_read, stats.non_expense, stats.missing_date
    )?;

    writeln!(out, "\nMonthly expense trend")?;
    if report.monthly_trend.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for m in &report.monthly_trend {
        writeln!(out, "  {}  {:>16}", m.month, money.format(m.total))?;
    }

    writeln!(out, "\nCategory breakdown")?;
    if report.category_breakdown.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for c in &report.category_breakdown {
        writeln!(
            out,
            "  {:<14} {:>16} {:>6.1}%  ({} txns)",
            c.category.name(),
            money.format(c.total),
            c.share,
            c.count
        )?;
    }

    let shown = limit.unwrap_or(report.transactions.len()).min(report.transactions.len());
    writeln!(out, "\nTransactions (newest first)")?;
    if report.transactions.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for t in report.transactions.iter().take(shown) {
        writeln!(
            out,
            "  {}  {:<14} {:>16}  {}",
            t.date(),
            t.category().name(),
            money.format(t.amount()),
            t.narration()
        )?;
    }
    if shown < report.transactions.len() {
        writeln!(out, "  ... {} more", report.transactions.len() - shown)?;
    }

    let available: Vec<&str> = report.available_categories.iter().map(|c| c.name()).collect();
    writeln!(out, "\nCategories in statement: {}", available.join(", "))?;

    Ok(())
}

/// One line per category in rule order: display name, the slug accepted by
/// `--category`, then its keywords.
pub fn write_categories(out: &mut impl Write, rules: &RuleTable) -> io::Result<()> {
    for category in Category::ALL {
        let keywords = rules.keywords(category);
        let matched_by = if keywords.is_empty() {
            "(anything unmatched)".to_string()
        } else {
            keywords.join(", ")
        };
        writeln!(out, "{:<14} {:<14} {}", category.name(), category.slug(), matched_by)?;
    }
    Ok(())
}
