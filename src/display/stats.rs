//! Statistics display formatting
//!
//! Totals, the 6-month trend, and per-category breakdowns.

use crate::reports::{CategoryBreakdown, TotalsSummary, TrendReport};

/// Format the income/expense totals block
pub fn format_totals(summary: &TotalsSummary, currency: &str) -> String {
    format!(
        "  Income:  {}\n  Expense: {}\n  Balance: {}\n",
        summary.income.format_with_symbol(currency),
        summary.expense.format_with_symbol(currency),
        summary.balance.format_with_symbol(currency),
    )
}

/// Format the 6-month trend as a month-per-line table
pub fn format_trend(report: &TrendReport, currency: &str) -> String {
    let mut output = String::new();
    output.push_str("Last 6 months:\n");

    for point in &report.points {
        output.push_str(&format!(
            "  {}  income {:>12}  expense {:>12}\n",
            point.month,
            point.income.format_with_symbol(currency),
            point.expense.format_with_symbol(currency),
        ));
    }

    output
}

/// Format a category breakdown with percentage shares
pub fn format_breakdown(breakdown: &CategoryBreakdown, currency: &str) -> String {
    if breakdown.slices.is_empty() {
        return format!("  (no {} this month)\n", breakdown.kind);
    }

    let mut output = String::new();
    for slice in &breakdown.slices {
        output.push_str(&format!(
            "  {:<12} {:>12}  {:>5.1}%\n",
            slice.category,
            slice.total.format_with_symbol(currency),
            slice.percentage,
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryKind, Money, Month, Transaction};
    use chrono::{TimeZone, Utc};

    fn sample_transactions() -> Vec<Transaction> {
        vec![
            Transaction::new(
                EntryKind::Expense,
                Money::from_cents(5000),
                "餐饮",
                "餐饮",
                Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap(),
            ),
            Transaction::new(
                EntryKind::Income,
                Money::from_cents(500_000),
                "工资",
                "工资",
                Utc.with_ymd_and_hms(2026, 8, 1, 9, 0, 0).unwrap(),
            ),
        ]
    }

    #[test]
    fn test_format_totals() {
        let summary = TotalsSummary::generate(&sample_transactions());
        let output = format_totals(&summary, "¥");
        assert!(output.contains("Income:  ¥5000.00"));
        assert!(output.contains("Expense: ¥50.00"));
        assert!(output.contains("Balance: ¥4950.00"));
    }

    #[test]
    fn test_format_trend_has_six_lines() {
        let report =
            TrendReport::generate(&sample_transactions(), Month::new(2026, 8).unwrap());
        let output = format_trend(&report, "¥");
        assert_eq!(output.lines().count(), 7); // header + 6 months
        assert!(output.contains("2026-08"));
        assert!(output.contains("2026-03"));
    }

    #[test]
    fn test_format_breakdown() {
        let breakdown = CategoryBreakdown::generate(
            &sample_transactions(),
            Month::new(2026, 8).unwrap(),
            EntryKind::Expense,
        );
        let output = format_breakdown(&breakdown, "¥");
        assert!(output.contains("餐饮"));
        assert!(output.contains("100.0%"));
    }

    #[test]
    fn test_format_breakdown_empty() {
        let breakdown =
            CategoryBreakdown::generate(&[], Month::new(2026, 8).unwrap(), EntryKind::Income);
        let output = format_breakdown(&breakdown, "¥");
        assert!(output.contains("no income"));
    }
}
