//! Storage initialization
//!
//! Handles first-run setup and default data creation

use crate::config::paths::CoinbookPaths;
use crate::error::CoinbookError;
use crate::models::{Category, EntryKind};

use super::file_io::write_json_atomic;

/// Names of the seed expense categories
pub const DEFAULT_EXPENSE_CATEGORIES: &[&str] = &["餐饮", "购物", "居住", "娱乐", "医疗", "其他"];

/// Names of the seed income categories
pub const DEFAULT_INCOME_CATEGORIES: &[&str] = &["工资", "其他"];

/// Initialize storage for a fresh installation
///
/// Creates the directory layout and the default category set. Idempotent:
/// existing data is never touched.
pub fn initialize_storage(paths: &CoinbookPaths) -> Result<(), CoinbookError> {
    paths.ensure_directories()?;

    if !paths.categories_file().exists() {
        write_json_atomic(paths.categories_file(), &seed_categories())?;
    }

    Ok(())
}

/// Build the fixed seed category set (expense categories first, then income)
pub fn seed_categories() -> Vec<Category> {
    let mut categories = Vec::new();

    for name in DEFAULT_EXPENSE_CATEGORIES {
        categories.push(Category::seed(*name, EntryKind::Expense));
    }

    for name in DEFAULT_INCOME_CATEGORIES {
        categories.push(Category::seed(*name, EntryKind::Income));
    }

    categories
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &CoinbookPaths) -> bool {
    !paths.categories_file().exists()
}
