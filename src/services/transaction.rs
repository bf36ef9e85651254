//! Transaction service
//!
//! Provides business logic for recording and deleting transactions.

use chrono::{DateTime, Utc};

use crate::error::{CoinbookError, CoinbookResult};
use crate::models::{EntryKind, Money, Transaction, TransactionId};
use crate::storage::Storage;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new transaction
    ///
    /// A blank note defaults to the category name; a missing date defaults to
    /// now. The new entry becomes the first in iteration order.
    pub fn add(
        &self,
        kind: EntryKind,
        amount: Money,
        category: &str,
        note: Option<&str>,
        date: Option<DateTime<Utc>>,
    ) -> CoinbookResult<Transaction> {
        let category = category.trim();

        let note = match note {
            Some(n) if !n.trim().is_empty() => n.trim().to_string(),
            _ => category.to_string(),
        };

        let transaction = Transaction::new(
            kind,
            amount,
            category,
            note,
            date.unwrap_or_else(Utc::now),
        );

        transaction
            .validate()
            .map_err(|e| CoinbookError::Validation(e.to_string()))?;

        self.storage.transactions.insert_front(transaction.clone())?;
        self.storage.transactions.save()?;

        Ok(transaction)
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> CoinbookResult<Option<Transaction>> {
        self.storage.transactions.get(id)
    }

    /// List all transactions, most recent first
    pub fn list(&self) -> CoinbookResult<Vec<Transaction>> {
        self.storage.transactions.get_all()
    }

    /// Delete a transaction
    ///
    /// Returns false (a no-op) if the ID is absent. Deletion has no cascade
    /// effects on categories or budgets.
    pub fn delete(&self, id: TransactionId) -> CoinbookResult<bool> {
        let removed = self.storage.transactions.delete(id)?;
        if removed {
            self.storage.transactions.save()?;
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::CoinbookPaths;
    use crate::storage::initialize_storage;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = CoinbookPaths::with_base_dir(temp_dir.path().to_path_buf());
        initialize_storage(&paths).unwrap();
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_add_prepends() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        service
            .add(EntryKind::Expense, Money::from_cents(1000), "餐饮", None, None)
            .unwrap();
        service
            .add(EntryKind::Expense, Money::from_cents(2000), "购物", None, None)
            .unwrap();

        let all = service.list().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].category, "购物");
    }

    #[test]
    fn test_add_increases_count_by_one() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let before = service.list().unwrap().len();
        service
            .add(EntryKind::Income, Money::from_cents(500_000), "工资", None, None)
            .unwrap();
        assert_eq!(service.list().unwrap().len(), before + 1);
    }

    #[test]
    fn test_blank_note_defaults_to_category() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let txn = service
            .add(EntryKind::Expense, Money::from_cents(1000), "餐饮", Some("  "), None)
            .unwrap();
        assert_eq!(txn.note, "餐饮");

        let txn = service
            .add(
                EntryKind::Expense,
                Money::from_cents(1000),
                "餐饮",
                Some("午饭"),
                None,
            )
            .unwrap();
        assert_eq!(txn.note, "午饭");
    }

    #[test]
    fn test_add_rejects_invalid_input() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let err = service
            .add(EntryKind::Expense, Money::zero(), "餐饮", None, None)
            .unwrap_err();
        assert!(err.is_validation());

        let err = service
            .add(EntryKind::Expense, Money::from_cents(100), "", None, None)
            .unwrap_err();
        assert!(err.is_validation());

        assert_eq!(service.list().unwrap().len(), 0);
    }

    #[test]
    fn test_delete_absent_is_noop() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        service
            .add(EntryKind::Expense, Money::from_cents(1000), "餐饮", None, None)
            .unwrap();

        assert!(!service.delete(TransactionId::new()).unwrap());
        assert_eq!(service.list().unwrap().len(), 1);
    }

    #[test]
    fn test_mutations_persist() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let txn = service
            .add(EntryKind::Expense, Money::from_cents(1000), "餐饮", None, None)
            .unwrap();

        // A second coordinator over the same paths sees the write
        let storage2 = Storage::new(storage.paths().clone()).unwrap();
        storage2.load_all().unwrap();
        assert!(storage2.transactions.get(txn.id).unwrap().is_some());
    }
}
