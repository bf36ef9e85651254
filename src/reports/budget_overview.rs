//! Budget utilization overview
//!
//! For each monthly budget: amount spent this month, remainder, utilization
//! percentage, and a three-tier health classification. Yearly budgets are
//! stored but not tracked, so they are skipped here.

use crate::models::{Budget, BudgetId, BudgetPeriod, Month, Money, Transaction};

use super::percentage_of;
use super::spending::MonthlySpending;

/// Budget health classification, used for presentation styling only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetTier {
    /// Spending has reached or passed the ceiling (>= 100%)
    Critical,
    /// Spending is close to the ceiling (80% - 100%)
    Warning,
    /// Spending is comfortably below the ceiling (< 80%)
    Normal,
}

impl BudgetTier {
    /// Classify a utilization percentage
    pub fn classify(percentage: f64) -> Self {
        if percentage >= 100.0 {
            Self::Critical
        } else if percentage >= 80.0 {
            Self::Warning
        } else {
            Self::Normal
        }
    }
}

/// Utilization of a single monthly budget
#[derive(Debug, Clone)]
pub struct BudgetRow {
    /// The budget's ID
    pub budget_id: BudgetId,
    /// The budgeted category name
    pub category: String,
    /// The budget ceiling
    pub amount: Money,
    /// Spent in the category this month
    pub spent: Money,
    /// amount - spent (negative when overspent)
    pub remaining: Money,
    /// spent / amount * 100; 0.0 when the amount is zero
    pub percentage: f64,
    /// Health classification of the percentage
    pub tier: BudgetTier,
}

/// Budget utilization for one month
#[derive(Debug, Clone)]
pub struct BudgetOverviewReport {
    /// The month the overview covers
    pub month: Month,
    /// One row per monthly budget, in budget insertion order
    pub rows: Vec<BudgetRow>,
    /// Sum of all monthly budget ceilings
    pub total_budget: Money,
    /// The month's expense total across all categories, budgeted or not
    pub total_spent: Money,
    /// total_budget - total_spent
    pub total_remaining: Money,
}

impl BudgetOverviewReport {
    /// Generate the overview for a month
    pub fn generate(budgets: &[Budget], transactions: &[Transaction], month: Month) -> Self {
        let spending = MonthlySpending::generate(transactions, month);

        let rows: Vec<BudgetRow> = budgets
            .iter()
            .filter(|b| b.period == BudgetPeriod::Monthly)
            .map(|budget| {
                let spent = spending.spent_for(&budget.category);
                let percentage = percentage_of(spent.cents(), budget.amount.cents());

                BudgetRow {
                    budget_id: budget.id,
                    category: budget.category.clone(),
                    amount: budget.amount,
                    spent,
                    remaining: budget.amount - spent,
                    percentage,
                    tier: BudgetTier::classify(percentage),
                }
            })
            .collect();

        let total_budget: Money = rows.iter().map(|r| r.amount).sum();
        let total_spent = spending.total;

        Self {
            month,
            rows,
            total_budget,
            total_spent,
            total_remaining: total_budget - total_spent,
        }
    }
}
