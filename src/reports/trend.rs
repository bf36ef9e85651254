//! Trailing 6-month income/expense trend
//!
//! For each of the 6 calendar months ending at the selected month
//! (inclusive), the income and expense totals from the full transaction set
//! filtered to that month.

use crate::models::{Month, Money, Transaction};

use super::summary::TotalsSummary;

/// Number of months in the trend window
pub const TREND_MONTHS: usize = 6;

/// Income and expense totals for one calendar month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyTotals {
    pub month: Month,
    pub income: Money,
    pub expense: Money,
}

/// The trailing 6-month series, oldest month first
#[derive(Debug, Clone)]
pub struct TrendReport {
    pub points: Vec<MonthlyTotals>,
}

impl TrendReport {
    /// Generate the series for the window ending at `end_month`
    pub fn generate(transactions: &[Transaction], end_month: Month) -> Self {
        let points = end_month
            .trailing(TREND_MONTHS)
            .into_iter()
            .map(|month| {
                let totals = TotalsSummary::for_month(transactions, month);
                MonthlyTotals {
                    month,
                    income: totals.income,
                    expense: totals.expense,
                }
            })
            .collect();

        Self { points }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryKind;
    use chrono::{TimeZone, Utc};

    fn txn(kind: EntryKind, cents: i64, year: i32, month: u32) -> Transaction {
        Transaction::new(
            kind,
            Money::from_cents(cents),
            "其他",
            "其他",
            Utc.with_ymd_and_hms(year, month, 5, 9, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_six_points_oldest_first() {
        let report = TrendReport::generate(&[], Month::new(2026, 8).unwrap());

        assert_eq!(report.points.len(), 6);
        assert_eq!(report.points[0].month, Month::new(2026, 3).unwrap());
        assert_eq!(report.points[5].month, Month::new(2026, 8).unwrap());
    }

    #[test]
    fn test_window_crosses_year_boundary() {
        let report = TrendReport::generate(&[], Month::new(2026, 2).unwrap());

        assert_eq!(report.points[0].month, Month::new(2025, 9).unwrap());
        assert_eq!(report.points[5].month, Month::new(2026, 2).unwrap());
    }

    #[test]
    fn test_totals_per_month() {
        let transactions = vec![
            txn(EntryKind::Expense, 5000, 2026, 8),
            txn(EntryKind::Income, 9000, 2026, 7),
            txn(EntryKind::Expense, 100, 2026, 1), // outside the window
        ];

        let report = TrendReport::generate(&transactions, Month::new(2026, 8).unwrap());

        let august = report.points.last().unwrap();
        assert_eq!(august.expense.cents(), 5000);
        assert_eq!(august.income, Money::zero());

        let july = &report.points[4];
        assert_eq!(july.income.cents(), 9000);

        let total_expense: Money = report.points.iter().map(|p| p.expense).sum();
        assert_eq!(total_expense.cents(), 5000);
    }
}
