//! Monthly spending by category
//!
//! The per-category expense map for one calendar month, consumed by the
//! budget overview and the home-screen alerts.

use std::collections::HashMap;

use crate::models::{Month, Money, Transaction};

/// Expense totals for one month, grouped by category name
#[derive(Debug, Clone)]
pub struct MonthlySpending {
    /// The month the totals cover
    pub month: Month,
    /// Expense sum per category name
    pub by_category: HashMap<String, Money>,
    /// Expense sum across all categories
    pub total: Money,
}

impl MonthlySpending {
    /// Group one month's expense transactions by category
    pub fn generate(transactions: &[Transaction], month: Month) -> Self {
        let mut by_category: HashMap<String, Money> = HashMap::new();
        let mut total = Money::zero();

        for txn in transactions
            .iter()
            .filter(|t| t.is_expense() && month.contains(&t.date))
        {
            *by_category.entry(txn.category.clone()).or_default() += txn.amount;
            total += txn.amount;
        }

        Self {
            month,
            by_category,
            total,
        }
    }

    /// Amount spent in a category this month (zero if none)
    pub fn spent_for(&self, category: &str) -> Money {
        self.by_category.get(category).copied().unwrap_or_default()
    }
}
