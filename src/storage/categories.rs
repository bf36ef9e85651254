//! Category repository for JSON storage
//!
//! Manages loading and saving categories to categories.json. Categories keep
//! their insertion order: the seed set first, user additions appended after.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::CoinbookError;
use crate::models::{Category, CategoryId, EntryKind};

use super::file_io::{read_json_or_default, write_json_atomic};

/// Repository for category persistence
pub struct CategoryRepository {
    path: PathBuf,
    records: RwLock<Vec<Category>>,
}

impl CategoryRepository {
    /// Create a new category repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            records: RwLock::new(Vec::new()),
        }
    }

    /// Load categories from disk
    pub fn load(&self) -> Result<(), CoinbookError> {
        let file_data: Vec<Category> = read_json_or_default(&self.path);

        let mut records = self
            .records
            .write()
            .map_err(|e| CoinbookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *records = file_data;
        Ok(())
    }

    /// Save categories to disk
    pub fn save(&self) -> Result<(), CoinbookError> {
        let records = self
            .records
            .read()
            .map_err(|e| CoinbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*records)
    }

    /// Append a category
    pub fn append(&self, category: Category) -> Result<(), CoinbookError> {
        let mut records = self
            .records
            .write()
            .map_err(|e| CoinbookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        records.push(category);
        Ok(())
    }

    /// Get a category by ID
    pub fn get(&self, id: CategoryId) -> Result<Option<Category>, CoinbookError> {
        let records = self
            .records
            .read()
            .map_err(|e| CoinbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(records.iter().find(|c| c.id == id).cloned())
    }

    /// Get all categories in insertion order
    pub fn get_all(&self) -> Result<Vec<Category>, CoinbookError> {
        let records = self
            .records
            .read()
            .map_err(|e| CoinbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(records.clone())
    }

    /// Get categories of one kind, in insertion order
    pub fn get_by_kind(&self, kind: EntryKind) -> Result<Vec<Category>, CoinbookError> {
        let records = self
            .records
            .read()
            .map_err(|e| CoinbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(records.iter().filter(|c| c.kind == kind).cloned().collect())
    }

    /// Find a category by exact name
    pub fn find_by_name(&self, name: &str) -> Result<Option<Category>, CoinbookError> {
        let records = self
            .records
            .read()
            .map_err(|e| CoinbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(records.iter().find(|c| c.name == name).cloned())
    }

    /// Delete a category; returns false if the ID is absent (no-op)
    pub fn delete(&self, id: CategoryId) -> Result<bool, CoinbookError> {
        let mut records = self
            .records
            .write()
            .map_err(|e| CoinbookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let before = records.len();
        records.retain(|c| c.id != id);
        Ok(records.len() < before)
    }

    /// Replace the whole collection (used by seeding and reset)
    pub fn replace_all(&self, categories: Vec<Category>) -> Result<(), CoinbookError> {
        let mut records = self
            .records
            .write()
            .map_err(|e| CoinbookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *records = categories;
        Ok(())
    }

    /// Count categories
    pub fn count(&self) -> Result<usize, CoinbookError> {
        let records = self
            .records
            .read()
            .map_err(|e| CoinbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, CategoryRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("categories.json");
        let repo = CategoryRepository::new(path);
        (temp_dir, repo)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_append_preserves_order() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.append(Category::seed("餐饮", EntryKind::Expense)).unwrap();
        repo.append(Category::new("书籍", EntryKind::Expense)).unwrap();

        let all = repo.get_all().unwrap();
        assert_eq!(all[0].name, "餐饮");
        assert_eq!(all[1].name, "书籍");
    }

    #[test]
    fn test_get_by_kind() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.append(Category::seed("餐饮", EntryKind::Expense)).unwrap();
        repo.append(Category::seed("工资", EntryKind::Income)).unwrap();

        let expenses = repo.get_by_kind(EntryKind::Expense).unwrap();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].name, "餐饮");
    }

    #[test]
    fn test_find_by_name() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.append(Category::seed("餐饮", EntryKind::Expense)).unwrap();

        assert!(repo.find_by_name("餐饮").unwrap().is_some());
        assert!(repo.find_by_name("missing").unwrap().is_none());
    }

    #[test]
    fn test_delete_absent_is_noop() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.append(Category::new("书籍", EntryKind::Expense)).unwrap();
        assert!(!repo.delete(CategoryId::new()).unwrap());
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let category = Category::seed("餐饮", EntryKind::Expense);
        let id = category.id;
        repo.append(category).unwrap();
        repo.save().unwrap();

        let repo2 = CategoryRepository::new(temp_dir.path().join("categories.json"));
        repo2.load().unwrap();

        let reloaded = repo2.get(id).unwrap().unwrap();
        assert_eq!(reloaded.name, "餐饮");
        assert!(reloaded.is_default);
    }
}
