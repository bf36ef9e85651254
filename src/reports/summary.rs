//! Income/expense totals
//!
//! The running totals shown on the home screen (full history) and in the
//! statistics view (one month).

use crate::models::{Month, Money, Transaction};

/// Total income, total expense, and their balance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TotalsSummary {
    /// Sum of all income amounts
    pub income: Money,
    /// Sum of all expense amounts
    pub expense: Money,
    /// income - expense
    pub balance: Money,
}

impl TotalsSummary {
    /// Totals over the full transaction set
    pub fn generate(transactions: &[Transaction]) -> Self {
        let income = transactions
            .iter()
            .filter(|t| t.is_income())
            .map(|t| t.amount)
            .sum();
        let expense = transactions
            .iter()
            .filter(|t| t.is_expense())
            .map(|t| t.amount)
            .sum();

        Self {
            income,
            expense,
            balance: income - expense,
        }
    }

    /// Totals over one calendar month
    pub fn for_month(transactions: &[Transaction], month: Month) -> Self {
        let filtered: Vec<Transaction> = transactions
            .iter()
            .filter(|t| month.contains(&t.date))
            .cloned()
            .collect();
        Self::generate(&filtered)
    }
}
