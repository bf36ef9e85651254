//! Per-category breakdown for one month
//!
//! Groups a month's transactions of one kind by category, computes each
//! category's share of the kind total, and assigns chart colors from a fixed
//! palette cyclically by sort position. Slices are sorted by amount
//! descending; ties keep first-seen insertion order (the sort is stable).

use crate::models::{EntryKind, Month, Money, Transaction};

use super::percentage_of;

/// Fixed chart palette, reused cyclically when there are more than 8 slices
pub const PALETTE: [&str; 8] = [
    "#3b82f6", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6", "#ec4899", "#14b8a6", "#f97316",
];

/// One category's share of the month
#[derive(Debug, Clone)]
pub struct BreakdownSlice {
    /// Category name
    pub category: String,
    /// Sum of the category's amounts
    pub total: Money,
    /// Share of the kind total, 0.0 when the kind total is zero
    pub percentage: f64,
    /// Palette color assigned by sort position
    pub color: &'static str,
}

/// Category breakdown of one kind for one month
#[derive(Debug, Clone)]
pub struct CategoryBreakdown {
    /// The month the breakdown covers
    pub month: Month,
    /// Which kind of entries were grouped
    pub kind: EntryKind,
    /// Slices sorted by amount descending
    pub slices: Vec<BreakdownSlice>,
    /// Sum across all slices
    pub total: Money,
}

impl CategoryBreakdown {
    /// Group one month's transactions of `kind` by category
    pub fn generate(transactions: &[Transaction], month: Month, kind: EntryKind) -> Self {
        // Group preserving first-seen order so the later stable sort breaks
        // ties by insertion order
        let mut groups: Vec<(String, Money)> = Vec::new();
        let mut total = Money::zero();

        for txn in transactions
            .iter()
            .filter(|t| t.kind == kind && month.contains(&t.date))
        {
            match groups.iter_mut().find(|(name, _)| *name == txn.category) {
                Some((_, sum)) => *sum += txn.amount,
                None => groups.push((txn.category.clone(), txn.amount)),
            }
            total += txn.amount;
        }

        groups.sort_by(|a, b| b.1.cmp(&a.1));

        let slices = groups
            .into_iter()
            .enumerate()
            .map(|(i, (category, sum))| BreakdownSlice {
                category,
                total: sum,
                percentage: percentage_of(sum.cents(), total.cents()),
                color: PALETTE[i % PALETTE.len()],
            })
            .collect();

        Self {
            month,
            kind,
            slices,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn expense(cents: i64, category: &str) -> Transaction {
        Transaction::new(
            EntryKind::Expense,
            Money::from_cents(cents),
            category,
            category,
            Utc.with_ymd_and_hms(2026, 8, 12, 19, 30, 0).unwrap(),
        )
    }

    fn month() -> Month {
        Month::new(2026, 8).unwrap()
    }

    #[test]
    fn test_sorted_by_amount_descending() {
        let transactions = vec![
            expense(2000, "购物"),
            expense(5000, "餐饮"),
            expense(1000, "娱乐"),
        ];

        let breakdown =
            CategoryBreakdown::generate(&transactions, month(), EntryKind::Expense);

        let names: Vec<&str> = breakdown
            .slices
            .iter()
            .map(|s| s.category.as_str())
            .collect();
        assert_eq!(names, vec!["餐饮", "购物", "娱乐"]);
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let transactions = vec![expense(2000, "购物"), expense(2000, "餐饮")];

        let breakdown =
            CategoryBreakdown::generate(&transactions, month(), EntryKind::Expense);

        assert_eq!(breakdown.slices[0].category, "购物");
        assert_eq!(breakdown.slices[1].category, "餐饮");
    }

    #[test]
    fn test_percentages() {
        let transactions = vec![expense(7500, "餐饮"), expense(2500, "购物")];

        let breakdown =
            CategoryBreakdown::generate(&transactions, month(), EntryKind::Expense);

        assert!((breakdown.slices[0].percentage - 75.0).abs() < f64::EPSILON);
        assert!((breakdown.slices[1].percentage - 25.0).abs() < f64::EPSILON);
        assert_eq!(breakdown.total.cents(), 10_000);
    }

    #[test]
    fn test_palette_cycles() {
        let transactions: Vec<Transaction> = (0..10)
            .map(|i| expense(1000 * (10 - i), &format!("cat{}", i)))
            .collect();

        let breakdown =
            CategoryBreakdown::generate(&transactions, month(), EntryKind::Expense);

        assert_eq!(breakdown.slices.len(), 10);
        assert_eq!(breakdown.slices[0].color, PALETTE[0]);
        assert_eq!(breakdown.slices[8].color, PALETTE[0]);
        assert_eq!(breakdown.slices[9].color, PALETTE[1]);
    }

    #[test]
    fn test_empty_month() {
        let breakdown = CategoryBreakdown::generate(&[], month(), EntryKind::Expense);
        assert!(breakdown.slices.is_empty());
        assert_eq!(breakdown.total, Money::zero());
    }

    #[test]
    fn test_kind_filter() {
        let mut income = expense(9000, "工资");
        income.kind = EntryKind::Income;
        let transactions = vec![expense(5000, "餐饮"), income];

        let breakdown =
            CategoryBreakdown::generate(&transactions, month(), EntryKind::Income);
        assert_eq!(breakdown.slices.len(), 1);
        assert_eq!(breakdown.slices[0].category, "工资");
    }
}
