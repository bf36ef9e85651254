//! Transaction repository for JSON storage
//!
//! Manages loading and saving transactions to transactions.json. The
//! collection is kept most-recent-first: new entries go to the front and the
//! persisted order is the iteration order.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::CoinbookError;
use crate::models::{Transaction, TransactionId};

use super::file_io::{read_json_or_default, write_json_atomic};

/// Repository for transaction persistence
pub struct TransactionRepository {
    path: PathBuf,
    records: RwLock<Vec<Transaction>>,
}

impl TransactionRepository {
    /// Create a new transaction repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            records: RwLock::new(Vec::new()),
        }
    }

    /// Load transactions from disk
    ///
    /// Missing or corrupt files load as an empty collection; timestamps are
    /// reconstructed from their serialized RFC 3339 form.
    pub fn load(&self) -> Result<(), CoinbookError> {
        let file_data: Vec<Transaction> = read_json_or_default(&self.path);

        let mut records = self
            .records
            .write()
            .map_err(|e| CoinbookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *records = file_data;
        Ok(())
    }

    /// Save transactions to disk
    pub fn save(&self) -> Result<(), CoinbookError> {
        let records = self
            .records
            .read()
            .map_err(|e| CoinbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*records)
    }

    /// Prepend a transaction (most-recent-first ordering)
    pub fn insert_front(&self, transaction: Transaction) -> Result<(), CoinbookError> {
        let mut records = self
            .records
            .write()
            .map_err(|e| CoinbookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        records.insert(0, transaction);
        Ok(())
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> Result<Option<Transaction>, CoinbookError> {
        let records = self
            .records
            .read()
            .map_err(|e| CoinbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(records.iter().find(|t| t.id == id).cloned())
    }

    /// Get all transactions in iteration order (most recent first)
    pub fn get_all(&self) -> Result<Vec<Transaction>, CoinbookError> {
        let records = self
            .records
            .read()
            .map_err(|e| CoinbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(records.clone())
    }

    /// Delete a transaction; returns false if the ID is absent (no-op)
    pub fn delete(&self, id: TransactionId) -> Result<bool, CoinbookError> {
        let mut records = self
            .records
            .write()
            .map_err(|e| CoinbookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let before = records.len();
        records.retain(|t| t.id != id);
        Ok(records.len() < before)
    }

    /// Count transactions
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryKind, Money};
    use chrono::Utc;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, TransactionRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.json");
        let repo = TransactionRepository::new(path);
        (temp_dir, repo)
    }

    fn sample(category: &str, cents: i64) -> Transaction {
        Transaction::new(
            EntryKind::Expense,
            Money::from_cents(cents),
            category,
            category,
            Utc::now(),
        )
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_insert_front_ordering() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.insert_front(sample("餐饮", 1000)).unwrap();
        repo.insert_front(sample("购物", 2000)).unwrap();

        let all = repo.get_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].category, "购物");
        assert_eq!(all[1].category, "餐饮");
    }

    #[test]
    fn test_delete_absent_is_noop() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.insert_front(sample("餐饮", 1000)).unwrap();
        assert!(!repo.delete(TransactionId::new()).unwrap());
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let txn = sample("餐饮", 5000);
        let id = txn.id;
        let date = txn.date;
        repo.insert_front(txn).unwrap();
        repo.save().unwrap();

        let repo2 = TransactionRepository::new(temp_dir.path().join("transactions.json"));
        repo2.load().unwrap();

        let reloaded = repo2.get(id).unwrap().unwrap();
        assert_eq!(reloaded.amount.cents(), 5000);
        assert_eq!(reloaded.date, date);
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let (temp_dir, repo) = create_test_repo();
        std::fs::write(temp_dir.path().join("transactions.json"), "{{{").unwrap();

        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }
}
