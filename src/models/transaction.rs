//! Transaction model
//!
//! A transaction is a single recorded income or expense event. Transactions
//! are immutable once created; the only supported mutation is whole-record
//! deletion.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::kind::EntryKind;
use super::money::Money;

/// A recorded income or expense event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Income or expense
    pub kind: EntryKind,

    /// Amount (always positive; `kind` carries the sign)
    pub amount: Money,

    /// Category name reference. Not a foreign key: the category may be
    /// deleted later without touching this record.
    pub category: String,

    /// Free-text note; callers default it to the category name when blank
    #[serde(default)]
    pub note: String,

    /// When the event happened; defaults to creation time
    pub date: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        kind: EntryKind,
        amount: Money,
        category: impl Into<String>,
        note: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            kind,
            amount,
            category: category.into(),
            note: note.into(),
            date,
        }
    }

    /// The amount with its sign applied: positive for income, negative for
    /// expense
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            EntryKind::Income => self.amount,
            EntryKind::Expense => -self.amount,
        }
    }

    /// Check if this is an income entry
    pub fn is_income(&self) -> bool {
        self.kind == EntryKind::Income
    }

    /// Check if this is an expense entry
    pub fn is_expense(&self) -> bool {
        self.kind == EntryKind::Expense
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount);
        }

        if self.category.trim().is_empty() {
            return Err(TransactionValidationError::EmptyCategory);
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.kind, self.amount, self.category)
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NonPositiveAmount,
    EmptyCategory,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount => write!(f, "Transaction amount must be positive"),
            Self::EmptyCategory => write!(f, "Transaction category cannot be empty"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}
