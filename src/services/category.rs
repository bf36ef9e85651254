//! Category service
//!
//! Provides business logic for category management. Deletion is guarded
//! here: seed categories cannot be removed, and a category still referenced
//! by transactions or budgets is refused rather than left dangling.

use crate::error::{CoinbookError, CoinbookResult};
use crate::models::{Category, CategoryId, EntryKind};
use crate::storage::Storage;

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new user category
    ///
    /// Names are not required to be unique; the entry is appended after the
    /// existing ones and `is_default` is always false.
    pub fn add(
        &self,
        name: &str,
        kind: EntryKind,
        icon: Option<&str>,
    ) -> CoinbookResult<Category> {
        let mut category = Category::new(name.trim(), kind);
        if let Some(icon) = icon {
            category = category.with_icon(icon);
        }

        category
            .validate()
            .map_err(|e| CoinbookError::Validation(e.to_string()))?;

        self.storage.categories.append(category.clone())?;
        self.storage.categories.save()?;

        Ok(category)
    }

    /// Get a category by ID
    pub fn get(&self, id: CategoryId) -> CoinbookResult<Option<Category>> {
        self.storage.categories.get(id)
    }

    /// List all categories in insertion order
    pub fn list(&self) -> CoinbookResult<Vec<Category>> {
        self.storage.categories.get_all()
    }

    /// List categories of one kind
    pub fn list_by_kind(&self, kind: EntryKind) -> CoinbookResult<Vec<Category>> {
        self.storage.categories.get_by_kind(kind)
    }

    /// Delete a category
    ///
    /// Returns false (a no-op) if the ID is absent. Seed categories are
    /// refused, as is any category whose name is still referenced by a
    /// transaction or budget; records loaded with already-dangling names are
    /// left alone.
    pub fn delete(&self, id: CategoryId) -> CoinbookResult<bool> {
        let category = match self.storage.categories.get(id)? {
            Some(category) => category,
            None => return Ok(false),
        };

        if category.is_default {
            return Err(CoinbookError::Validation(format!(
                "Default category '{}' cannot be deleted",
                category.name
            )));
        }

        let transaction_refs = self
            .storage
            .transactions
            .get_all()?
            .iter()
            .filter(|t| t.category == category.name)
            .count();
        if transaction_refs > 0 {
            return Err(CoinbookError::InUse {
                entity_type: "Category",
                identifier: category.name.clone(),
                detail: format!("{} transaction(s) reference it", transaction_refs),
            });
        }

        if self
            .storage
            .budgets
            .find_by_category(&category.name)?
            .is_some()
        {
            return Err(CoinbookError::InUse {
                entity_type: "Category",
                identifier: category.name.clone(),
                detail: "a budget references it".to_string(),
            });
        }

        let removed = self.storage.categories.delete(id)?;
        if removed {
            self.storage.categories.save()?;
        }
        Ok(removed)
    }
}
