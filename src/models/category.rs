//! Category model
//!
//! Categories classify transactions and budgets by name. A fixed seed set is
//! created on first run; those carry `is_default` and cannot be deleted.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use super::kind::EntryKind;

/// A user- or system-defined label classifying transactions and budgets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Display label; not guaranteed unique across kinds
    pub name: String,

    /// Income or expense
    pub kind: EntryKind,

    /// Optional icon tag for presentation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Seed categories cannot be deleted
    #[serde(default)]
    pub is_default: bool,
}

impl Category {
    /// Create a new user category
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            kind,
            icon: None,
            is_default: false,
        }
    }

    /// Create a seed category (marked default, so it cannot be deleted)
    pub fn seed(name: impl Into<String>, kind: EntryKind) -> Self {
        let mut category = Self::new(name, kind);
        category.is_default = true;
        category
    }

    /// Attach an icon tag
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.name.chars().count() > 50 {
            return Err(CategoryValidationError::NameTooLong(
                self.name.chars().count(),
            ));
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max 50)", len)
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}
