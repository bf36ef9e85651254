//! Budget model
//!
//! A budget is a spending ceiling set for one category over a period. Only
//! monthly budgets are computed against in aggregation; yearly ones are
//! stored and listed but not tracked.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BudgetId;
use super::money::Money;
use super::period::BudgetPeriod;

/// A spending ceiling for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// Unique identifier
    pub id: BudgetId,

    /// Category name reference (same dangling semantics as transactions)
    pub category: String,

    /// Ceiling amount (always positive)
    pub amount: Money,

    /// Period the ceiling applies to
    #[serde(default)]
    pub period: BudgetPeriod,
}

impl Budget {
    /// Create a new monthly budget
    pub fn new(category: impl Into<String>, amount: Money) -> Self {
        Self {
            id: BudgetId::new(),
            category: category.into(),
            amount,
            period: BudgetPeriod::Monthly,
        }
    }

    /// Create a budget with an explicit period
    pub fn with_period(category: impl Into<String>, amount: Money, period: BudgetPeriod) -> Self {
        let mut budget = Self::new(category, amount);
        budget.period = period;
        budget
    }

    /// Validate the budget
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if !self.amount.is_positive() {
            return Err(BudgetValidationError::NonPositiveAmount);
        }

        if self.category.trim().is_empty() {
            return Err(BudgetValidationError::EmptyCategory);
        }

        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.category, self.amount, self.period)
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NonPositiveAmount,
    EmptyCategory,
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount => write!(f, "Budget amount must be positive"),
            Self::EmptyCategory => write!(f, "Budget category cannot be empty"),
        }
    }
}

impl std::error::Error for BudgetValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_budget() {
        let budget = Budget::new("餐饮", Money::from_cents(100_000));
        assert_eq!(budget.period, BudgetPeriod::Monthly);
        assert!(budget.validate().is_ok());
    }

    #[test]
    fn test_with_period() {
        let budget =
            Budget::with_period("旅行", Money::from_cents(500_000), BudgetPeriod::Yearly);
        assert_eq!(budget.period, BudgetPeriod::Yearly);
    }

    #[test]
    fn test_validation() {
        let mut budget = Budget::new("餐饮", Money::zero());
        assert_eq!(
            budget.validate(),
            Err(BudgetValidationError::NonPositiveAmount)
        );

        budget.amount = Money::from_cents(100);
        budget.category = String::new();
        assert_eq!(budget.validate(), Err(BudgetValidationError::EmptyCategory));
    }

    #[test]
    fn test_serialization_round_trip() {
        let budget = Budget::new("购物", Money::from_cents(30_000));
        let json = serde_json::to_string(&budget).unwrap();
        let deserialized: Budget = serde_json::from_str(&json).unwrap();
        assert_eq!(budget, deserialized);
    }
}
