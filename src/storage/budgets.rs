//! Budget repository for JSON storage
//!
//! Manages loading and saving budgets to budgets.json, in insertion order.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::CoinbookError;
use crate::models::{Budget, BudgetId, Money};

use super::file_io::{read_json_or_default, write_json_atomic};

/// Repository for budget persistence
pub struct BudgetRepository {
    path: PathBuf,
    records: RwLock<Vec<Budget>>,
}

impl BudgetRepository {
    /// Create a new budget repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            records: RwLock::new(Vec::new()),
        }
    }

    /// Load budgets from disk
    pub fn load(&self) -> Result<(), CoinbookError> {
        let file_data: Vec<Budget> = read_json_or_default(&self.path);

        let mut records = self
            .records
            .write()
            .map_err(|e| CoinbookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *records = file_data;
        Ok(())
    }

    /// Save budgets to disk
    pub fn save(&self) -> Result<(), CoinbookError> {
        let records = self
            .records
            .read()
            .map_err(|e| CoinbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*records)
    }

    /// Append a budget
    pub fn append(&self, budget: Budget) -> Result<(), CoinbookError> {
        let mut records = self
            .records
            .write()
            .map_err(|e| CoinbookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        records.push(budget);
        Ok(())
    }

    /// Get a budget by ID
    pub fn get(&self, id: BudgetId) -> Result<Option<Budget>, CoinbookError> {
        let records = self
            .records
            .read()
            .map_err(|e| CoinbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(records.iter().find(|b| b.id == id).cloned())
    }

    /// Get all budgets in insertion order
    pub fn get_all(&self) -> Result<Vec<Budget>, CoinbookError> {
        let records = self
            .records
            .read()
            .map_err(|e| CoinbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(records.clone())
    }

    /// Find the budget for a category name
    pub fn find_by_category(&self, category: &str) -> Result<Option<Budget>, CoinbookError> {
        let records = self
            .records
            .read()
            .map_err(|e| CoinbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(records.iter().find(|b| b.category == category).cloned())
    }

    /// Replace only the amount of an existing budget; returns false if the
    /// ID is absent (no-op)
    pub fn set_amount(&self, id: BudgetId, amount: Money) -> Result<bool, CoinbookError> {
        let mut records = self
            .records
            .write()
            .map_err(|e| CoinbookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        match records.iter_mut().find(|b| b.id == id) {
            Some(budget) => {
                budget.amount = amount;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Delete a budget; returns false if the ID is absent (no-op)
    pub fn delete(&self, id: BudgetId) -> Result<bool, CoinbookError> {
        let mut records = self
            .records
            .write()
            .map_err(|e| CoinbookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let before = records.len();
        records.retain(|b| b.id != id);
        Ok(records.len() < before)
    }

    /// Count budgets
    pub fn count(&self) -> Result<usize, CoinbookError> {
        let records = self
            .records
            .read()
            .map_err(|e| CoinbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(records.len())
    }

    /// Drop all in-memory records (used by reset)
    pub fn clear(&self) -> Result<(), CoinbookError> {
        let mut records = self
            .records
            .write()
            .map_err(|e| CoinbookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        records.clear();
        Ok(())
    }
}
