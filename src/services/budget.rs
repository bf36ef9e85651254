//! Budget service
//!
//! Provides business logic for budget management. One budget per category is
//! enforced here, not left to the presentation layer.

use crate::error::{CoinbookError, CoinbookResult};
use crate::models::{Budget, BudgetId, BudgetPeriod, Money};
use crate::storage::Storage;

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new budget for a category
    pub fn add(
        &self,
        category: &str,
        amount: Money,
        period: BudgetPeriod,
    ) -> CoinbookResult<Budget> {
        let category = category.trim();

        if self.storage.budgets.find_by_category(category)?.is_some() {
            return Err(CoinbookError::Duplicate {
                entity_type: "Budget",
                identifier: category.to_string(),
            });
        }

        let budget = Budget::with_period(category, amount, period);
        budget
            .validate()
            .map_err(|e| CoinbookError::Validation(e.to_string()))?;

        self.storage.budgets.append(budget.clone())?;
        self.storage.budgets.save()?;

        Ok(budget)
    }

    /// Get a budget by ID
    pub fn get(&self, id: BudgetId) -> CoinbookResult<Option<Budget>> {
        self.storage.budgets.get(id)
    }

    /// List all budgets in insertion order
    pub fn list(&self) -> CoinbookResult<Vec<Budget>> {
        self.storage.budgets.get_all()
    }

    /// Replace the amount of an existing budget, leaving every other field
    /// untouched
    ///
    /// Returns false (a no-op) if the ID is absent.
    pub fn update_amount(&self, id: BudgetId, amount: Money) -> CoinbookResult<bool> {
        if !amount.is_positive() {
            return Err(CoinbookError::Validation(
                "Budget amount must be positive".to_string(),
            ));
        }

        let updated = self.storage.budgets.set_amount(id, amount)?;
        if updated {
            self.storage.budgets.save()?;
        }
        Ok(updated)
    }

    /// Delete a budget
    ///
    /// Returns false (a no-op) if the ID is absent.
    pub fn delete(&self, id: BudgetId) -> CoinbookResult<bool> {
        let removed = self.storage.budgets.delete(id)?;
        if removed {
            self.storage.budgets.save()?;
        }
        Ok(removed)
    }
}
