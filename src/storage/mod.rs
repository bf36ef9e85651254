//! Storage layer for coinbook
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. Each collection persists to its own document; missing or corrupt
//! documents load as defaults.

pub mod budgets;
pub mod categories;
pub mod file_io;
pub mod init;
pub mod transactions;

pub use budgets::BudgetRepository;
pub use categories::CategoryRepository;
pub use file_io::{read_json_or_default, write_json_atomic};
pub use init::initialize_storage;
pub use transactions::TransactionRepository;

use crate::config::paths::CoinbookPaths;
use crate::error::CoinbookError;

/// Main storage coordinator that provides access to all repositories
///
/// The coordinator exclusively owns the three collections; services borrow it
/// for mutations and reports read snapshots from it.
pub struct Storage {
    paths: CoinbookPaths,
    pub transactions: TransactionRepository,
    pub categories: CategoryRepository,
    pub budgets: BudgetRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: CoinbookPaths) -> Result<Self, CoinbookError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionRepository::new(paths.transactions_file()),
            categories: CategoryRepository::new(paths.categories_file()),
            budgets: BudgetRepository::new(paths.budgets_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &CoinbookPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&self) -> Result<(), CoinbookError> {
        self.transactions.load()?;
        self.categories.load()?;
        self.budgets.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), CoinbookError> {
        self.transactions.save()?;
        self.categories.save()?;
        self.budgets.save()?;
        Ok(())
    }

    /// Wipe everything and restore the initial state
    ///
    /// Removes the three persisted documents, empties transactions and
    /// budgets, restores the seed categories, and re-persists them so the
    /// reset state survives a restart. Destructive and irreversible.
    pub fn reset_all(&self) -> Result<(), CoinbookError> {
        for path in [
            self.paths.transactions_file(),
            self.paths.categories_file(),
            self.paths.budgets_file(),
        ] {
            if path.exists() {
                std::fs::remove_file(&path).map_err(|e| {
                    CoinbookError::Storage(format!(
                        "Failed to remove {}: {}",
                        path.display(),
                        e
                    ))
                })?;
            }
        }

        self.transactions.clear()?;
        self.budgets.clear()?;
        self.categories.replace_all(init::seed_categories())?;
        self.categories.save()?;

        Ok(())
    }
}
